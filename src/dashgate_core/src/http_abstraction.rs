//! Web-framework-neutral response construction.
//!
//! The signup and login handlers only ever answer with a status code and a
//! `{ "msg": ... }` JSON body. They describe that answer through
//! [`AuthResponseBuilder`]; each web integration supplies its own builder
//! type and decides how the parts become a concrete response.

/// Chained construction of one HTTP response.
pub trait AuthResponseBuilder: Sized {
    type Response;

    fn status(self, code: u16) -> Self;

    /// Appends a header. Invalid names or values are the builder's problem to
    /// report at [`build`](Self::build) time.
    fn header(self, name: &str, value: &str) -> Self;

    /// Sets the body; implementations also set `content-type: application/json`.
    fn json_body(self, body: serde_json::Value) -> Self;

    fn build(self) -> Self::Response;
}

/// Shorthands for the `{ "msg": ... }` replies the dashboard understands.
///
/// Blanket-implemented for every [`AuthResponseBuilder`].
pub trait AuthResponseHelpers: AuthResponseBuilder {
    fn message(self, code: u16, msg: &str) -> Self::Response {
        self.status(code)
            .json_body(serde_json::json!({ "msg": msg }))
            .build()
    }

    fn ok_msg(self, msg: &str) -> Self::Response {
        self.message(200, msg)
    }

    fn bad_request(self, msg: &str) -> Self::Response {
        self.message(400, msg)
    }

    fn unauthorized(self, msg: &str) -> Self::Response {
        self.message(401, msg)
    }

    fn internal_error(self, msg: &str) -> Self::Response {
        self.message(500, msg)
    }
}

impl<B: AuthResponseBuilder> AuthResponseHelpers for B {}
