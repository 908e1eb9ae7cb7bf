use crate::server::{
    error::AppError,
    middleware::session::{AuthSession, CsrfSession},
};
use test_utils::context::TestContext;

mod csrf_session;
