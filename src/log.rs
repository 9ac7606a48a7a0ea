// FolioFx
// copyright folio_fx developers 2025

//! Log module wires the `log` facade to a backend, reference
//! https://docs.rs/log4rs
//!
//! Native builds write to a file through log4rs, wasm builds go to the
//! browser console. Library code only uses the `log` macros.

use crate::error::Result;
use log::LevelFilter;

#[cfg(all(not(target_arch = "wasm32"), feature = "log4rs"))]
use crate::error::FxError;
#[cfg(all(not(target_arch = "wasm32"), feature = "log4rs"))]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system
#[allow(unused)]
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_logger::init(wasm_logger::Config::new(level.to_level().unwrap_or(log::Level::Info)));
    }
    #[cfg(all(not(target_arch = "wasm32"), feature = "log4rs"))]
    {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
            )))
            .build(file_path)
            .map_err(|e| FxError::Log(e.to_string()))?;
        let config = Config::builder()
            .appender(
                Appender::builder()
                    .filter(Box::new(ThresholdFilter::new(level)))
                    .build("logfile", Box::new(logfile)),
            )
            .build(Root::builder().appender("logfile").build(level))
            .map_err(|e| FxError::Log(e.to_string()))?;
        log4rs::init_config(config).map_err(|e| FxError::Log(e.to_string()))?;
    }
    Ok(())
}
