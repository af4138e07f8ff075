//! cochl-ds: a terminal browser for the Cochl design-system catalog.
//!
//! # Usage
//!
//! ```bash
//! cochl-ds
//! cochl-ds --theme light --ascii
//! cochl-ds --print-state --action select-item=Tabs --action tab=usage
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use cochl_ds::action::{Action, run_script};
use cochl_ds::app::App;
use cochl_ds::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use cochl_ds::perf;
use cochl_ds::ui::style::{Background, set_background_mode};

/// Browse the Cochl design-system component catalog
#[derive(Parser, Debug)]
#[command(name = "cochl-ds", version, about, long_about = None)]
struct Cli {
    /// Force the color scheme for a light or dark terminal
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Draw chevrons, arrows and check marks with ASCII characters
    #[arg(long)]
    ascii: bool,

    /// Enable performance timing scopes
    #[arg(long)]
    perf: bool,

    /// Write input and frame debug events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,

    /// Apply the actions to a fresh session and print its state as JSON
    #[arg(long)]
    print_state: bool,

    /// Session action for --print-state, e.g. `select-item=Tabs` (repeatable)
    #[arg(long = "action", value_name = "ACTION")]
    actions: Vec<String>,
}

// Query the terminal background using OSC 11.
// We talk to /dev/tty so the terminal responds even when stdout is piped.
// On non-Unix platforms we skip the query entirely.
#[cfg(not(unix))]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    Ok(None)
}

#[cfg(unix)]
fn query_terminal_background() -> std::io::Result<Option<(u8, u8, u8)>> {
    use std::io::{Read, Write};
    use std::sync::mpsc;

    let (tx, rx) = mpsc::channel();

    let mut io = std::fs::OpenOptions::new().read(true).write(true).open("/dev/tty")?;
    let reader = io.try_clone()?;

    // OSC 11 query: ESC ] 11 ; ? BEL
    io.write_all(b"\x1b]11;?\x07")?;
    io.flush()?;

    std::thread::spawn(move || {
        let mut reader = reader;
        let mut buf = [0u8; 256];
        let mut collected: Vec<u8> = Vec::new();
        loop {
            match reader.read(&mut buf) {
                Ok(0) => continue,
                Ok(n) => {
                    collected.extend_from_slice(&buf[..n]);
                    if collected.contains(&b'\x07') || collected.windows(2).any(|w| w == b"\x1b\\") {
                        let _ = tx.send(collected);
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let Ok(collected) = rx.recv_timeout(Duration::from_millis(75)) else {
        return Ok(None);
    };
    let text = String::from_utf8_lossy(&collected);
    Ok(parse_osc11_reply(&text))
}

fn theme_from_rgb(r: u8, g: u8, b: u8) -> Background {
    let luma = 0.0722f32.mul_add(
        f32::from(b),
        0.2126f32.mul_add(f32::from(r), 0.7152 * f32::from(g)),
    );
    if luma >= 140.0 {
        Background::Light
    } else {
        Background::Dark
    }
}

fn detect_theme() -> Option<Background> {
    let _raw = enable_raw_mode();
    let result = query_terminal_background();
    let _ = disable_raw_mode();
    result.ok().flatten().map(|(r, g, b)| theme_from_rgb(r, g, b))
}

fn parse_osc11_reply(reply: &str) -> Option<(u8, u8, u8)> {
    // Expect: ESC ] 11 ; rgb:RRRR/GGGG/BBBB BEL or ST
    let start = reply.find("rgb:")?;
    let data = &reply[start + 4..];
    let mut parts = data.split(['/', '\x07', '\x1b']);
    let r = parts.next()?;
    let g = parts.next()?;
    let b = parts.next()?;
    Some((parse_osc_component(r)?, parse_osc_component(g)?, parse_osc_component(b)?))
}

fn parse_osc_component(s: &str) -> Option<u8> {
    let hex = s.trim();
    if hex.len() >= 4 {
        let v = u16::from_str_radix(hex.get(..4)?, 16).ok()?;
        u8::try_from(v >> 8).ok()
    } else if hex.len() == 2 {
        u8::from_str_radix(hex, 16).ok()
    } else {
        None
    }
}

fn init_tracing(perf_enabled: bool) -> Result<()> {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if perf_enabled {
        filter = filter.add_directive("cochl_ds::perf=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_state(raw_actions: &[String]) -> Result<()> {
    let actions = raw_actions
        .iter()
        .map(|raw| {
            raw.parse::<Action>()
                .with_context(|| format!("Invalid --action `{raw}`"))
        })
        .collect::<Result<Vec<_>>>()?;
    let snapshot = run_script(&actions);
    let json = serde_json::to_string_pretty(&snapshot).context("Failed to serialize state")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_tracing(effective.perf)?;
    perf::set_enabled(effective.perf);
    if let Err(err) = perf::set_debug_log_path(effective.render_debug_log.as_deref()) {
        tracing::warn!(
            path = ?effective.render_debug_log,
            %err,
            "failed to initialize render debug log"
        );
    }

    if cli.print_state {
        return print_state(&cli.actions);
    }
    if !cli.actions.is_empty() {
        tracing::warn!("--action only applies together with --print-state");
    }

    match effective.theme.unwrap_or(ThemeMode::Auto) {
        ThemeMode::Auto => set_background_mode(detect_theme()),
        ThemeMode::Light => set_background_mode(Some(Background::Light)),
        ThemeMode::Dark => set_background_mode(Some(Background::Dark)),
    }

    let mut app = App::new()
        .with_ascii(effective.ascii)
        .with_mouse(!effective.no_mouse)
        .with_config_paths(
            Some(global_path),
            local_path.exists().then_some(local_path),
        );

    app.run().context("Application error")
}
