use batchpass::pass::request::{MAX_COUNT, MAX_LENGTH};

use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top, format_number};

pub fn print_help() {
    box_top("Batchpass");
    box_line_center("Batches of unique random passwords");
    box_line("");
    box_line("USAGE:");
    box_line("  batchpass [weak|normal|strong] [LENGTH*COUNT] [OPTIONS]");
    box_line("");
    box_line("  Without LENGTH*COUNT an inline prompt asks for it (Esc cancels).");
    box_line("  When stdin is not a terminal, one line is read from stdin.");
    box_line(&format!(
        "  Limits: length 1-{}, count 1-{}.",
        MAX_LENGTH,
        format_number(MAX_COUNT)
    ));
    box_line("");
    box_line("TIERS:");
    box_opt("  weak", "Letters a-z A-Z (52 symbols)");
    box_opt("  normal", "Letters and digits (62 symbols, default)");
    box_opt("  strong", "Letters, digits and ASCII punctuation (94 symbols)");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -t, --tier <TIER>", "Strength tier, same as the positional word");
    box_opt("      --max-attempts <N>", "Redraws allowed per password before giving up (default: 1000)");
    box_opt("      --settings <FILE>", "Settings file (default: ~/.config/batchpass/settings)");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output <FILE>", "Insert into FILE instead of printing");
    box_opt("      --at <POS|START:END>", "Cursor or selection in FILE as byte offsets (default: end). A selection is replaced.");
    box_opt("  -b, --board", "Replace the clipboard contents");
    box_opt("  -q, --quiet", "Suppress warnings and the summary line");
    box_line("");
    box_line(" Entropy:");
    box_opt("  -u, --urandom", "Use /dev/urandom instead of the hardware counter");
    box_opt("      --seed <N>", "Reproducible output for the same seed");
    box_line("");
    box_line(" Info:");
    box_opt("      --verbose", "Debug logging on stderr (RUST_LOG overrides)");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  batchpass '8*10'                Ten 8-character passwords");
    box_line("  batchpass weak '4*3'            Three 4-letter passwords");
    box_line("  batchpass strong '32*5' -b      Five to the clipboard");
    box_line("  batchpass '16*2' -o notes.txt --at 120");
    box_line("");
    box_bottom();
    println!();
}
