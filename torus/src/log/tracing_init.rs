// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, or use [`try_initialize_logging_global()`] which does it for you.
///
/// # Errors
///
/// Returns an error if a layer can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.display_preference,
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer. There is no
/// layer to return when `level_filter` is [`LevelFilter::OFF`].
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// Returns an error if the layer can't be created.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    display_preference: DisplayPreference,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    if level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    // Shared configuration regardless of where logs are output to.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    Ok(Some(match display_preference {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }))
}

/// Install a global subscriber built from [`try_create_layers()`].
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(try_create_layers(tracing_config)?)
        .try_init()
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, DisplayPreference::Stdout).unwrap();
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::OFF, DisplayPreference::Stderr).unwrap();
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_layers() {
        let config = TracingConfig::new_display(DisplayPreference::Stdout);
        assert_eq!(try_create_layers(config).unwrap().len(), 1);

        let config = config.with_level_filter(LevelFilter::OFF);
        assert!(try_create_layers(config).unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_try_initialize_logging_global_only_once() {
        let config = TracingConfig::new_display(DisplayPreference::Stderr)
            .with_level_filter(LevelFilter::TRACE);
        assert!(try_initialize_logging_global(config).is_ok());
        assert!(try_initialize_logging_global(config).is_err());

        // Mapping transitions log through the installed subscriber.
        let mut torus = crate::TorusMapping::<i64>::new(4, 4);
        torus.shift(crate::point(1, 1));
        tracing::debug!(message = "Logging initialized", region = %torus.get_region());
    }
}
