use std::{ops::Deref, sync::Arc};

use crate::{response::Responder, traits::StateProvider};

#[derive(Clone, Default)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(responder: Responder) -> Self {
        Self {
            inner: Arc::new(ApiStateInner { responder }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Default)]
pub struct ApiStateInner {
    responder: Responder,
}

impl StateProvider for ApiState {
    fn responder(&self) -> &Responder {
        &self.responder
    }
}
