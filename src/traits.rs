use crate::response::Responder;

pub trait StateProvider {
    /// Returns the responder used for every JSON response, rejections included.
    fn responder(&self) -> &Responder;
}
