//! The legacy text report.
//!
//! The layout is fixed by decades of downstream parsers: a comment
//! banner, the constituent count, one `name speed` line per constituent,
//! the starting year, then the equilibrium-argument and node-factor
//! tables, each preceded by its year count, printed ten values per line
//! and terminated by `*END*`. Comment lines start with `#` and are
//! skipped by consumers; everything else is positional.

use crate::constituent::Constituent;
use std::io::{self, Write};
use tidal_core::format::normalize;

pub fn write_report<W: Write>(
    out: &mut W,
    constituents: &[Constituent],
    first_year: u16,
) -> io::Result<()> {
    let num_years = constituents.first().map_or(0, Constituent::num_years);

    writeln!(out, "# ------------- Begin generated constituents -------------")?;
    writeln!(out, "#\n# Number of constituents")?;
    writeln!(out, "{}", constituents.len())?;
    writeln!(out, "#\n# Constituent speeds")?;
    writeln!(out, "# Format:  identifier [whitespace] speed [CR]")?;
    writeln!(out, "# Speed is in degrees per solar hour.")?;
    writeln!(out, "# Identifiers are names for readability only; consumers")?;
    writeln!(out, "# rely on the constituents keeping one order throughout")?;
    writeln!(out, "# this file.")?;
    for c in constituents {
        writeln!(out, "{:<27} {:>11.7}", c.name, c.speed)?;
    }

    writeln!(out, "#\n# Starting year for equilibrium arguments and node factors")?;
    writeln!(out, "{first_year}")?;
    writeln!(
        out,
        "#\n\
         # The following table gives equilibrium arguments in degrees for\n\
         # the meridian of Greenwich, at the beginning of each year.\n\
         #\n\
         # First line:  how many years in this table [CR]\n\
         # Remainder of table:  identifier [whitespace] arg [whitespace] arg...\n\
         # Carriage returns inside the table will be ignored.\n\
         #\n\
         # DO NOT PUT COMMENT LINES INSIDE THE FOLLOWING TABLE.\n\
         # DO NOT REMOVE THE \"*END*\" AT THE END."
    )?;
    writeln!(out, "{num_years}")?;
    for c in constituents {
        write_series(out, &c.name, &c.vpu, |v| normalize(v, 2))?;
    }
    writeln!(
        out,
        "*END*\n#\n\
         # Now come the node factors for the middle of each year.\n\
         #\n\
         # First line:  how many years in this table [CR]\n\
         # Remainder of table:  identifier [whitespace] factor [whitespace] factor...\n\
         # Carriage returns inside the table will be ignored.\n\
         #\n\
         # DO NOT PUT COMMENT LINES INSIDE THE FOLLOWING TABLE.\n\
         # DO NOT REMOVE THE \"*END*\" AT THE END."
    )?;
    writeln!(out, "{num_years}")?;
    for c in constituents {
        write_series(out, &c.name, &c.f, |f| format!("{f:6.4}"))?;
    }
    writeln!(out, "*END*\n#\n# ------------- End generated constituents -------------")?;

    Ok(())
}

/// One constituent's series: name on its own line, then the values ten
/// per line.
fn write_series<W: Write>(
    out: &mut W,
    name: &str,
    values: &[f64],
    fmt: impl Fn(f64) -> String,
) -> io::Result<()> {
    writeln!(out, "{name}")?;
    for chunk in values.chunks(10) {
        let row: Vec<String> = chunk.iter().map(|&v| fmt(v)).collect();
        writeln!(out, "{}", row.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::constituent::YearSpan;

    fn report_for(catalog: &str, span: YearSpan) -> String {
        let list = parse_catalog(catalog, span).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &list, span.first_year).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_structure() {
        let text = report_for(
            "M₂ Basic 2 -2 2 0 0 0 2 -2 0 0 0 0 78",
            YearSpan::new(1970, 1990, 1900),
        );
        assert!(text.contains("\n1\n")); // constituent count
        assert!(text.contains("\n1970\n")); // starting year
        assert!(text.contains("\n21\n")); // year count before each table
        assert_eq!(text.matches("*END*").count(), 2);
        assert!(text.ends_with("# ------------- End generated constituents -------------\n"));
    }

    #[test]
    fn test_speed_line_format() {
        let text = report_for(
            "M₂ Basic 2 -2 2 0 0 0 2 -2 0 0 0 0 78",
            YearSpan::new(1970, 1970, 1900),
        );
        assert!(text.contains("M₂                           28.9841042\n"));
    }

    #[test]
    fn test_ten_values_per_line() {
        let text = report_for(
            "S₂ Basic 2 0 0 0 0 0 0 0 0 0 0 0 1",
            YearSpan::new(1970, 1993, 1900),
        );
        // 24 years: the node factor table carries rows of 10, 10, and 4
        let after_name = text.rsplit("S₂\n").next().unwrap();
        let rows: Vec<&str> = after_name
            .lines()
            .take_while(|l| !l.starts_with('*'))
            .collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].split_whitespace().count(), 10);
        assert_eq!(rows[2].split_whitespace().count(), 4);
        // S₂ has no node modulation at all
        assert!(rows.iter().all(|r| r
            .split_whitespace()
            .all(|v| v == "1.0000")));
    }
}
