use std::{borrow::Cow, io::stderr};

use clap::{crate_name, crate_version};
use sentry::{ClientInitGuard, ClientOptions, SessionMode, integrations::tracing::EventFilter};
use tracing::{Level, Metadata, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LoggingArgs;

/// Installed logging. Dropping it flushes the pending events, so keep it till the end of `main`.
pub struct Logging {
    sentry: ClientInitGuard,
    _stderr: WorkerGuard,
}

impl Logging {
    pub fn init(args: LoggingArgs) -> anyhow::Result<Self> {
        let sentry = sentry::init((args.sentry_dsn, ClientOptions {
            attach_stacktrace: true,
            in_app_include: vec![crate_name!()],
            release: Some(Cow::Borrowed(crate_version!())),
            environment: args.sentry_environment.map(Cow::Owned),
            session_mode: SessionMode::Application,
            ..Default::default()
        }));
        let (writer, stderr) = tracing_appender::non_blocking(stderr());

        tracing_subscriber::registry()
            .with(
                sentry::integrations::tracing::layer()
                    .event_filter(event_filter)
                    .span_filter(|metadata| metadata.level() <= &Level::INFO),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .without_time()
                    .with_filter(EnvFilter::try_new(&args.log_filter)?),
            )
            .try_init()?;

        let this = Self { sentry, _stderr: stderr };
        if !this.is_reporting() {
            warn!("Sentry is disabled");
        }
        Ok(this)
    }

    #[must_use]
    pub fn is_reporting(&self) -> bool {
        self.sentry.is_enabled()
    }
}

/// Errors and warnings become Sentry events, the rest only accompanies them.
fn event_filter(metadata: &Metadata) -> EventFilter {
    if *metadata.level() <= Level::WARN { EventFilter::Exception } else { EventFilter::Breadcrumb }
}
