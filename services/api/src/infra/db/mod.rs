//! sea-orm adapters for the repository ports.

use anyhow::Context as _;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};
use sea_orm::{DbErr, TransactionError};

use crate::error::{ApiError, is_unique_violation};

mod banner;
mod otp;
mod profile;
mod review;
mod social;
mod talent;
mod user;
mod work;

pub use banner::DbBannerRepository;
pub use otp::DbOtpRepository;
pub use profile::DbProfileRepository;
pub use review::DbReviewRepository;
pub use social::DbSocialAccountRepository;
pub use talent::DbTalentRepository;
pub use user::DbUserRepository;
pub use work::DbWorkSampleRepository;

/// Case-insensitive substring match on `col`.
pub(crate) fn icontains<C: IntoColumnRef>(col: C, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(col))).like(pattern)
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Parse a stored enum column, surfacing corrupt rows as internal errors.
pub(crate) fn parse_column<T>(raw: &str, column: &'static str) -> Result<T, ApiError>
where
    T: std::str::FromStr<Err = kala_domain::UnknownVariant>,
{
    Ok(raw.parse::<T>().with_context(|| format!("decode {column}"))?)
}

/// Map a failed insert: unique violations become `duplicate`, foreign-key
/// violations `UserNotFound`, everything else internal.
pub(crate) fn map_owned_insert(err: DbErr, duplicate: ApiError, what: &'static str) -> ApiError {
    if is_unique_violation(&err) {
        return duplicate;
    }
    if matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(_))
    ) {
        return ApiError::UserNotFound;
    }
    ApiError::Internal(anyhow::Error::new(err).context(what))
}

/// Unwrap the store error carried by a failed transaction.
pub(crate) fn transaction_db_err(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    }
}

/// SQL text of every statement a mock connection ran, in order, with
/// `BEGIN`, `COMMIT` and `ROLLBACK` markers.
#[cfg(test)]
pub(crate) fn executed_sql(db: sea_orm::DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .flat_map(|t| t.statements().iter().map(|s| s.sql.clone()))
        .collect()
}

/// Index of the first statement containing every fragment.
#[cfg(test)]
pub(crate) fn position_of(sql: &[String], fragments: &[&str]) -> Option<usize> {
    sql.iter()
        .position(|s| fragments.iter().all(|f| s.contains(f)))
}
