//! Command-line flags layered over the saved configuration

use anyhow::Result;
use clap::{Parser, ValueEnum};
use pincode_core::{Mode, Pin};

use crate::app::TuiConfig;

#[derive(Parser, Debug)]
#[command(name = "pincode-tui")]
#[command(about = "Four-digit PIN entry widget in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Reference PIN for verify mode
    #[arg(long)]
    pub reference: Option<String>,

    /// Wrong entries allowed before the host is told
    #[arg(long)]
    pub retries: Option<u32>,

    /// Hide the info message beneath the boxes
    #[arg(long)]
    pub hide_info: bool,

    /// Use the high-contrast palette
    #[arg(long)]
    pub high_contrast: bool,

    /// Write the resulting configuration back to disk
    #[arg(long)]
    pub save_config: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    SetNew,
    Verify,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SetNew => Mode::SetNew,
            ModeArg::Verify => Mode::Verify,
        }
    }
}

impl Cli {
    /// Override configuration values with the flags that were given
    pub fn apply(&self, config: &mut TuiConfig) -> Result<()> {
        if let Some(mode) = self.mode {
            config.pin_code.mode = mode.into();
        }
        if let Some(reference) = &self.reference {
            config.pin_code.reference_pin = Pin::parse(reference)?;
        }
        if let Some(retries) = self.retries {
            if retries == 0 {
                anyhow::bail!("--retries must be at least 1");
            }
            config.pin_code.retry_budget = retries;
        }
        if self.hide_info {
            config.pin_code.info_message_visible = false;
        }
        if self.high_contrast {
            config.high_contrast = true;
        }
        Ok(())
    }
}
