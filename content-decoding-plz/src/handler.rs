use http::Request;

use crate::body::Body;
use crate::response::ResponseWriter;

/// Blocking request handler.
///
/// Implemented for every `Fn(&mut dyn ResponseWriter, Request<Body>)`, so
/// plain functions and closures can be used as the next handler.
pub trait Handler {
    fn serve(&self, w: &mut dyn ResponseWriter, req: Request<Body>);
}

impl<F> Handler for F
where
    F: Fn(&mut dyn ResponseWriter, Request<Body>),
{
    fn serve(&self, w: &mut dyn ResponseWriter, req: Request<Body>) {
        (self)(w, req)
    }
}
