//! Request context for authenticated handlers.
//!
//! The [resolver](crate::ctx::resolver) middleware runs once per request and
//! records its outcome as a [`MaybeCtx`] request extension. Handlers and the
//! access-decision middleware consume it through the [`Ctx`] extractor, which
//! fails closed when the resolver has not executed.

use sw_models::user::User;

pub mod resolver;

/// The identity resolved for a request.
///
/// Carries a read snapshot of the user record, valid for this request only;
/// it is never persisted or shared across requests.
#[derive(Debug, Clone)]
pub struct Ctx {
    /// The authenticated user.
    pub user: User,
}

impl Ctx {
    /// Creates a context for a resolved user.
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

/// Outcome of running the context resolver on a request.
///
/// `MaybeCtx(None)` means the request is anonymous: either no credential was
/// presented, or a validly signed token named a user that no longer exists.
/// The absence of this extension altogether means the resolver never ran.
#[derive(Debug, Clone)]
pub struct MaybeCtx(pub Option<Ctx>);
