//! One-shot sizing through the form controller's submit path

use super::render_notice;
use crate::context::AppContext;
use anyhow::Result;
use solarsite_cli::progress;
use solarsite_core::{Error, ErrorCode};
use solarsite_planner::Notice;
use solarsite_telemetry::Timer;

/// Validate the inputs, fetch irradiance and print the report
pub async fn run(ctx: &AppContext, lat: &str, lng: &str, kwh: &str) -> Result<()> {
    let mut form = ctx.form_controller();
    form.set_latitude_text(lat);
    form.set_longitude_text(lng);
    form.set_power_text(kwh);

    let pending = match form.begin_submit() {
        Ok(pending) => pending,
        Err(notice) => return Err(notice_error(notice, ErrorCode::InvalidInput).into()),
    };

    let spinner = progress::spinner("Fetching irradiance data...", ctx.quiet());
    let timer = Timer::start("sizing");
    let result = ctx.client.irradiance().average(pending.at).await;
    timer.stop();
    progress::finish_clear(&spinner);

    match form.finish_submit(pending, result) {
        Some(notice @ Notice::Report(_)) => {
            render_notice(&notice, ctx.format)?;
            Ok(())
        }
        Some(notice) => Err(notice_error(notice, ErrorCode::IrradianceFailed).into()),
        None => Err(Error::new(ErrorCode::Internal, "Sizing result was superseded").into()),
    }
}

fn notice_error(notice: Notice, code: ErrorCode) -> Error {
    match notice {
        Notice::Alert { message } => Error::new(code, message),
        Notice::Report(_) => Error::new(ErrorCode::Internal, "Unexpected sizing report"),
    }
}
