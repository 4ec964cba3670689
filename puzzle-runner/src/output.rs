use colored::Colorize;

pub const NUMBER_DASHES: usize = 80;

pub fn print_header(title: &str) {
    let side = NUMBER_DASHES.saturating_sub(title.len() + 2) / 2;
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    println!(
        "{} {} {}",
        "-".repeat(side).red().bold(),
        title.bold(),
        "-".repeat(NUMBER_DASHES.saturating_sub(side + title.len() + 2))
            .red()
            .bold()
    );
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}
