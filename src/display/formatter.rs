//! Markdown terminal formatting using termimad

use termimad::{gray, MadSkin};

use crate::config::ColorChoice;
use crate::display::terminal::should_use_colors;

/// Print Markdown search results, styled when colors are enabled
pub fn print_markdown(markdown: &str, color: ColorChoice) {
    if should_use_colors(color) {
        print_rich(markdown);
    } else {
        print_plain(markdown);
    }
}

fn print_rich(markdown: &str) {
    skin().print_text(markdown);
}

/// Score headings in cyan, commands in yellow, info in the default color
fn skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();
    skin.headers[1].set_fg(Cyan);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.inline_code.set_fg(Yellow);
    skin.inline_code.set_bg(gray(2));
    skin.bullet.set_fg(Cyan);
    skin.italic.add_attr(Attribute::Italic);
    skin
}

fn print_plain(markdown: &str) {
    println!("{}", markdown);
}
