//! UI/Progress presentation layer
//!
//! The CLI reports a generation run through a [`generator::Observer`]:
//! - [`InteractiveReporter`] draws an indicatif bar while resources are
//!   compressed and, with `--verbose`, one line per resource;
//! - [`generator::Silent`] is used for `--quiet`.
//!
//! [`display`] holds the plain status lines printed around a run.

pub mod display;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::Resource;
use crate::generator::{self, GenerationReport};
use crate::hash::short_digest;

/// Progress reporter with a visual progress bar
pub struct InteractiveReporter {
    bar: Option<ProgressBar>,
    verbose: bool,
}

impl InteractiveReporter {
    pub fn new(verbose: bool) -> Self {
        Self { bar: None, verbose }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("#>-"))
    }

    fn line(&self, text: String) {
        match self.bar {
            Some(ref bar) => bar.suspend(|| println!("{text}")),
            None => println!("{text}"),
        }
    }
}

impl generator::Observer for InteractiveReporter {
    fn on_scanned(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(Self::style());
        self.bar = Some(bar);
    }

    fn on_resource(&mut self, resource: &Resource) {
        if self.verbose {
            self.line(format!(
                "  {} {} -> {} bytes ({})",
                Style::new().bold().apply_to(&resource.name.name),
                resource.raw_size,
                resource.compressed_size(),
                Style::new().dim().apply_to(short_digest(&resource.checksum))
            ));
        }
        if let Some(ref bar) = self.bar {
            bar.set_message(resource.relative_path.clone());
            bar.inc(1);
        }
    }

    fn on_finished(&mut self, _report: &GenerationReport) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for InteractiveReporter {
    fn drop(&mut self) {
        if let Some(ref bar) = self.bar {
            bar.abandon();
        }
    }
}
