//! CLI output formatting utilities.
//!
//! Colored status lines, the configuration dump shown with `--verbose`, and
//! human-readable durations.

use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use buildhelper_lib::config::BuildConfig;

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

pub fn format_duration(duration: Duration) -> String {
  let secs = duration.as_secs();
  let millis = duration.subsec_millis();

  if secs >= 60 {
    let mins = secs / 60;
    let remaining_secs = secs % 60;
    format!("{}m {}s", mins, remaining_secs)
  } else if secs > 0 {
    format!("{}.{:02}s", secs, millis / 10)
  } else {
    format!("{}ms", millis)
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

fn print_list<T: std::fmt::Display>(label: &str, items: impl IntoIterator<Item = T>) {
  println!("  {}:", label.if_supports_color(Stream::Stdout, |s| s.dimmed()));
  for item in items {
    println!("    {} {}", symbols::ARROW, item);
  }
}

/// Dump the effective configuration.
pub fn print_config(config: &BuildConfig) {
  print_info("Build configuration");
  print_stat("Project", &config.project_name);
  print_stat("Output", config.artifact_name());
  print_stat("Type", &config.output_type.to_string());
  print_stat("Compiler", &config.compiler);
  print_stat("C++ standard", &config.cpp_standard);
  print_stat("Optimization", &config.optimization);
  print_stat("Debug", if config.debug { "yes" } else { "no" });
  print_stat("Build dir", &config.build_dir.display().to_string());

  print_list(
    &format!("Source files ({})", config.source_files.len()),
    config.source_files.iter().map(|p| p.display()),
  );
  if !config.include_dirs.is_empty() {
    print_list("Include directories", config.include_dirs.iter().map(|p| p.display()));
  }
  if !config.library_dirs.is_empty() {
    print_list("Library directories", config.library_dirs.iter().map(|p| p.display()));
  }
  if !config.libraries.is_empty() {
    print_list("Libraries", &config.libraries);
  }
  println!();
}
