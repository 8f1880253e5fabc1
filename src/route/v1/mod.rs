pub mod app;
pub mod err;
pub mod readiness;
pub mod whoami;
