//! Background jobs: keep-alive ping and expired-OTP sweep.

use std::time::Duration;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::infra::db::DbOtpRepository;
use crate::usecase::otp::SweepExpiredOtpsUseCase;

/// Every ten minutes, on the minute.
const EVERY_TEN_MINUTES: &str = "0 */10 * * * *";

const KEEP_ALIVE_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn start_scheduler(
    db: DatabaseConnection,
    http: reqwest::Client,
    keep_alive_url: Option<String>,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    let sweep_job = Job::new_async(EVERY_TEN_MINUTES, move |_uuid, _lock| {
        let db = db.clone();
        Box::pin(async move {
            let usecase = SweepExpiredOtpsUseCase {
                otps: DbOtpRepository { db },
            };
            match usecase.execute(Utc::now()).await {
                Ok(deleted) => tracing::info!(deleted, "expired otp sweep finished"),
                Err(e) => tracing::warn!(error = %e, "expired otp sweep failed"),
            }
        })
    })?;
    scheduler.add(sweep_job).await?;

    match keep_alive_url {
        Some(base) => {
            let target = health_url(&base);
            let ping_job = Job::new_async(EVERY_TEN_MINUTES, move |_uuid, _lock| {
                let http = http.clone();
                let target = target.clone();
                Box::pin(async move { ping(&http, &target).await })
            })?;
            scheduler.add(ping_job).await?;
            tracing::info!("keep-alive ping scheduled");
        }
        None => tracing::info!("KEEP_ALIVE_URL unset, keep-alive ping disabled"),
    }

    scheduler.start().await?;
    tracing::info!("scheduler started (otp sweep every 10 minutes)");
    Ok(scheduler)
}

fn health_url(base: &str) -> String {
    format!("{}/healthz", base.trim_end_matches('/'))
}

async fn ping(http: &reqwest::Client, target: &str) {
    match http.get(target).timeout(KEEP_ALIVE_TIMEOUT).send().await {
        Ok(resp) => tracing::info!(status = %resp.status(), "keep-alive ping"),
        Err(e) => tracing::warn!(error = %e, "keep-alive ping failed"),
    }
}
