use owo_colors::OwoColorize;

/// Prefix for every console line printed by the advisor
const BADGE: &str = "💅";

/// Print a status message (cyan)
pub fn status(message: &str) {
    println!("{} {}", BADGE, message.cyan());
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{} {}", BADGE, message.green());
}

/// Print a warning message (yellow)
pub fn warn(message: &str) {
    println!("{} {}", BADGE, message.yellow());
}

/// Print an error message (red)
pub fn error(message: &str) {
    eprintln!("{} {}", BADGE, message.red());
}

pub fn startup_banner(service_name: &str) {
    println!();
    println!("{}", "═".repeat(50).bright_magenta());
    println!("{}  {}", BADGE, service_name.bright_magenta().bold());
    println!("{}", "═".repeat(50).bright_magenta());
    println!();
}

pub fn section(title: &str) {
    println!();
    println!(
        "{}  {}",
        "─".repeat(3).bright_white().dimmed(),
        title.bright_white().bold()
    );
}

pub fn config_item(key: &str, value: &str) {
    println!(
        "{} {} {}",
        BADGE,
        format!("{}:", key).bright_white(),
        value.bright_cyan()
    );
}

/// Print a multi-line block such as the rendered schedule
pub fn text_block(text: &str) {
    for line in text.lines() {
        println!("  {}", line.bright_yellow());
    }
}

/// Print the open/closed state
pub fn open_state(is_open: bool) {
    if is_open {
        println!("{} {}", BADGE, "Open now".green().bold());
    } else {
        println!("{} {}", BADGE, "Closed now".red().bold());
    }
}

pub fn ready(address: &str) {
    println!();
    println!("{}", "┌─────────────────────────────────────────┐".green());
    println!("{}  {} Advisor API is ready!", "│".green(), BADGE);
    println!("{}  🌐 Listening on {}", "│".green(), address.bright_white().bold());
    println!("{}", "└─────────────────────────────────────────┘".green());
    println!();
}
