// Use cases layer: response mapping, login orchestration and session ownership.

pub mod api_result;
pub mod latest;
pub mod login;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

pub use api_result::{Envelope, RawResponse, map_response};
pub use login::{
    LoginDeps, LoginFlowClosed, LoginHandle, LoginSettings, LoginSignal, LoginState,
    SignInOutcome, spawn_login_flow,
};
pub use session::UserSession;
