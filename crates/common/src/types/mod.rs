use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }
}

/// Body returned by the root endpoint.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    pub message: String,
}

impl Welcome {
    pub fn new(service: &str) -> Self {
        Self { message: format!("Welcome to the {service} API") }
    }
}
