#![allow(dead_code)]

use std::sync::Mutex;

use cadastro_forms::{
    BoxFuture, Field, JobRole, JobRoleForm, MemoryNotifier, Reply, Transport, TransportError,
};

/// What the fake service does with each request.
#[derive(Debug, Clone)]
pub enum Script {
    Reply { status: u16, body: String },
    Refuse(String),
}

/// A transport that answers from a script and records every body it was sent.
#[derive(Debug)]
pub struct FakeTransport {
    script: Script,
    sent: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(Script::Reply {
            status,
            body: body.to_string(),
        })
    }

    pub fn refusing(reason: &str) -> Self {
        Self::new(Script::Refuse(reason.to_string()))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Bodies of all requests made so far.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn post_json<'a>(&'a self, record: &'a JobRole) -> BoxFuture<'a, Result<Reply, TransportError>> {
        Box::pin(async move {
            let body = serde_json::to_string(record).unwrap();
            self.sent.lock().unwrap().push(body);
            match &self.script {
                Script::Reply { status, body } => Ok(Reply::new(*status, body.as_bytes())),
                Script::Refuse(reason) => Err(TransportError::Connection(reason.clone())),
            }
        })
    }
}

pub type TestForm = JobRoleForm<FakeTransport, MemoryNotifier>;

pub fn form(transport: FakeTransport) -> TestForm {
    JobRoleForm::new(transport, MemoryNotifier::new())
}

/// Fills the form with a record that passes the pre-submission checks.
pub fn fill_valid(form: &mut TestForm) {
    form.on_field_change(Field::Name, "Ana");
    form.on_field_change(Field::Description, "");
    form.on_field_change(Field::Salary, "1500");
    form.on_field_change(Field::Company, "Acme");
}

/// Replays typing `text` into `field` one character at a time.
pub fn type_into(form: &mut TestForm, field: Field, text: &str) {
    for ch in text.chars() {
        let mut next = form.record().get(field).to_string();
        next.push(ch);
        form.on_field_change(field, &next);
    }
}
