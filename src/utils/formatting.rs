//! Formatting utilities used for CLI output and correction messages.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // es: 07:30
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 07h 30m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Render an optional value, `--:--` style placeholder when absent.
pub fn or_dash<T: ToString>(v: Option<T>, dash: &str) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| dash.to_string())
}
