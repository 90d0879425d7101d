//! Regenerates the published reference tables as an engine self-test.
//!
//! The output reproduces Schureman's tables — mean longitudes, the
//! I/ν/ξ/ν′/2ν″ table against N, the L₂ and M₁ auxiliaries, and the
//! node factors for 1850–1999 — close enough to diff by eye against the
//! printed originals. Logarithms follow the astronomical-table
//! convention of adding 10 when negative. The box-drawing decoration is
//! fixed text.

use std::io::{self, Write};
use tidal_astro::calendar::{year_middle, year_start};
use tidal_astro::longitude::{midyear_longitudes, v_longitudes, MID_N, MID_P, V_H, V_P, V_P1, V_S};
use tidal_astro::node_factor::node_factor;
use tidal_astro::orbit::{inclination, nu, nu_prime, p_arg, q, q_a, r, r_a, two_nu_dprime, xi};
use tidal_astro::{longitude, orbit};
use tidal_core::constants::DAYS_PER_JULIAN_CENTURY;
use tidal_core::format::{normalize, snormalize};

fn mangled_log10(x: f64) -> f64 {
    let l = x.log10();
    if l < 0.0 {
        l + 10.0
    } else {
        l
    }
}

pub fn write_reference_tables<W: Write>(out: &mut W) -> io::Result<()> {
    century_longitudes(out)?;
    longitude_rates(out)?;

    writeln!(
        out,
        "\n    Table 4.--Mean longitude of lunar and solar elements at Jan. 1, 0 hour,\n\
         \x20          Greenwich mean civil time, of each year from 1800 to 2000"
    )?;
    tab4part(out, 1800)?;
    writeln!(
        out,
        "\n    Table 4.--Mean longitude of lunar and solar elements at Jan. 1, 0 hour,\n\
         \x20     Greenwich mean civil time, of each year from 1800 to 2000--Continued"
    )?;
    tab4part(out, 1900)?;

    table6(out)?;
    table7(out)?;
    table8(out)?;
    table9(out)?;
    table10(out)?;
    node_factor_table(out)
}

fn century_longitudes<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "════════════════════════════════════════════════════════════════════════════════\n\
         \x20         MEAN LONGITUDE OF SOLAR AND LUNAR ELEMENTS FOR CENTURY YEARS\n\
         ────────────────────────────────────────┬───────┬───────┬───────┬───────┬───────\n\
         \x20                                       │       │ Solar │       │ Lunar │Moon's\n\
         \x20      Epoch, Gregorian calendar        │  Sun  │perigee│ Moon  │perigee│ node\n\
         \x20      Greenwich mean civil time        │   h   │   p₁  │   s   │   p   │   N\n\
         ────────────────────────────────────────┼───────┼───────┼───────┼───────┼───────\n\
         \x20                                       │   °   │   °   │   °   │   °   │   °"
    )?;
    for year in (1600..=2000u16).step_by(100) {
        let t = year_start(year);
        let v = v_longitudes(t);
        writeln!(
            out,
            "{}, Jan. 1, 0 hour                    │{}│{}│{}│{}│{}",
            year,
            normalize(v[V_H], 3),
            normalize(v[V_P1], 3),
            normalize(v[V_S], 3),
            normalize(v[V_P], 3),
            normalize(midyear_longitudes(t)[MID_N], 3),
        )?;
    }
    writeln!(
        out,
        "════════════════════════════════════════╧═══════╧═══════╧═══════╧═══════╧═══════"
    )
}

fn longitude_rates<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nRATE OF CHANGE IN MEAN LONGITUDE OF SOLAR AND LUNAR ELEMENTS (EPOCH, JAN. 1, 1900)\n\
         \x20                      ────────────────────┬─────────────\n\
         \x20                            Elements      │Per solar day\n\
         \x20                      ────────────────────┼─────────────\n\
         \x20                                          │       °"
    )?;
    let t = year_start(1900);
    let v = longitude::v_rates(t);
    let per_day = |x: f64| x / DAYS_PER_JULIAN_CENTURY;
    writeln!(
        out,
        "                       Sun (h)             │  {:10.7}",
        per_day(v[V_H])
    )?;
    writeln!(
        out,
        "                       Solar perigee (p₁)  │  {:10.7}",
        per_day(v[V_P1])
    )?;
    writeln!(out, "                                           │")?;
    writeln!(
        out,
        "                       Moon (s)            │  {:10.7}",
        per_day(v[V_S])
    )?;
    writeln!(
        out,
        "                       Lunar perigee (p)   │  {:10.7}",
        per_day(v[V_P])
    )?;
    writeln!(
        out,
        "                       Moon's node (N)     │  {:10.7}",
        per_day(longitude::midyear_rates(t)[MID_N])
    )?;
    writeln!(out, "                       ════════════════════╧═════════════")
}

fn tab4row<W: Write>(out: &mut W, left_year: u16, right_year: u16) -> io::Result<()> {
    let cells = |year: u16| {
        let t = year_start(year);
        let v = v_longitudes(t);
        [
            normalize(v[V_S], 2),
            normalize(v[V_P], 2),
            normalize(v[V_H], 2),
            normalize(v[V_P1], 2),
            normalize(midyear_longitudes(t)[MID_N], 2),
        ]
    };
    let l = cells(left_year);
    write!(
        out,
        "{:4}│{}│{}│{}│{}│{}║",
        left_year, l[0], l[1], l[2], l[3], l[4]
    )?;
    if right_year != 0 {
        let r = cells(right_year);
        writeln!(
            out,
            "{:4}│{}│{}│{}│{}│{}",
            right_year, r[0], r[1], r[2], r[3], r[4]
        )
    } else {
        writeln!(out, "    │      │      │      │      │")
    }
}

fn tab4part<W: Write>(out: &mut W, first: u16) -> io::Result<()> {
    writeln!(
        out,
        "════╤══════╤══════╤══════╤══════╤══════╦════╤══════╤══════╤══════╤══════╤══════\n\
         Year│  s   │  p   │  h   │  p₁  │  N   ║Year│  s   │  p   │  h   │  p₁  │  N\n\
         ────┼──────┼──────┼──────┼──────┼──────║────┼──────┼──────┼──────┼──────┼──────\n\
         \x20   │  °   │  °   │  °   │  °   │  °   ║    │  °   │  °   │  °   │  °   │  °"
    )?;
    for year in first..first + 52 {
        let mut right = year + 52;
        if (1900..=1903).contains(&right) || right > 2000 {
            right = 0;
        }
        tab4row(out, year, right)?;
        if year == 1851 || year == 1951 {
            writeln!(
                out,
                "────┴──────┴──────┴──────┴──────┴──────╨────┴──────┴──────┴──────┴──────┴──────"
            )?;
        } else if (year + 1) % 4 == 0 {
            writeln!(
                out,
                "    │      │      │      │      │      ║    │      │      │      │      │"
            )?;
        }
    }
    Ok(())
}

fn table6<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n         Table 6.--Values of I, ν, ξ, ν′, and 2ν″ for each degree of N.\n\
         ═══╤══════╤══════╤══════╤══════╤═══════╦═══════╤══════╤══════╤══════╤══════╤═══\n\
         \x20N │   I  │   ν  │   ξ  │   ν′ │  2ν″  ║    I  │   ν  │   ξ  │   ν′ │  2ν″ │ N\n\
         ───┼──────┼──────┼──────┼──────┼───────║───────┼──────┼──────┼──────┼──────┼───\n\
         \x20° │   °  │   °  │   °  │   °  │   °   ║    °  │   °  │   °  │   °  │   °  │ °"
    )?;
    for n in 0..=180u16 {
        let asc = f64::from(n);
        let desc = f64::from(360 - n);
        writeln!(
            out,
            "{:3}│{}│{}│{}│{}│{} ║ {}│{}│{}│{}│{}│{:3}",
            n,
            normalize(inclination(asc), 2),
            normalize(nu(asc), 2),
            normalize(xi(asc), 2),
            normalize(nu_prime(asc), 2),
            normalize(two_nu_dprime(asc), 2),
            normalize(inclination(desc), 2),
            &snormalize(nu(desc), 2)[1..],
            &snormalize(xi(desc), 2)[1..],
            &snormalize(nu_prime(desc), 2)[1..],
            &snormalize(two_nu_dprime(desc), 2)[1..],
            360 - n,
        )?;
        if n % 3 == 0 && n < 180 {
            writeln!(
                out,
                "   │      │      │      │      │       ║       │      │      │      │      │"
            )?;
        }
    }
    writeln!(
        out,
        "───┴──────┴──────┴──────┴──────┴───────╨───────┴──────┴──────┴──────┴──────┴───"
    )
}

fn table7<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n                   Table 7.--Log Rₐ for amplitude of constituent L₂\n\
         ═══╤══════╤══════╤══════╤══════╤══════╤══════╤══════╤══════╤══════╤══════╤══════╤══════"
    )?;
    write!(out, "P\\I")?;
    for i in 18..=29u16 {
        write!(out, "│{i:4}  ")?;
    }
    write!(out, "\n───")?;
    for _ in 18..=29 {
        write!(out, "┼──────")?;
    }
    write!(out, "\n °")?;
    for _ in 18..=29 {
        write!(out, " │  °  ")?;
    }
    writeln!(out)?;
    for p in (0..=360u16).step_by(5) {
        write!(out, "{p:3}")?;
        for i in 18..=29u16 {
            write!(
                out,
                "│{:6.4}",
                mangled_log10(r_a(f64::from(p), f64::from(i)))
            )?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "───┴──────┴──────┴──────┴──────┴──────┴──────┴──────┴──────┴──────┴──────┴──────┴──────"
    )
}

fn table8<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n              Table 8.--Values of R for argument of constituent L₂\n\
         \x20 ═══╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════"
    )?;
    write!(out, "  P\\I")?;
    for i in 18..=29u16 {
        write!(out, "│{i:4} ")?;
    }
    write!(out, "\n  ───")?;
    for _ in 18..=29 {
        write!(out, "┼─────")?;
    }
    write!(out, "\n   °")?;
    for _ in 18..=29 {
        write!(out, " │  ° ")?;
    }
    writeln!(out)?;
    for p in (0..=360u16).step_by(5) {
        write!(out, "  {p:3}")?;
        for i in 18..=29u16 {
            write!(out, "│{}", &snormalize(r(f64::from(p), f64::from(i)), 1)[1..])?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "  ───┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────"
    )
}

fn table9<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n                Table 9.--Log Qₐ for amplitude of constituent M₁\n\
         \x20              ═══╤═══════╦════╤═══════╦════╤═══════╦════╤══════\n\
         \x20               P │Log Qₐ ║  P │Log Qₐ ║  P │Log Qₐ ║  P │Log Qₐ\n\
         \x20              ───┼───────║────┼───────║────┼───────║────┼──────\n\
         \x20               ° │   °   ║  ° │   °   ║  ° │   °   ║  ° │   °"
    )?;
    for p in 0..=90u16 {
        let lq = |deg: u16| mangled_log10(q_a(f64::from(deg)));
        writeln!(
            out,
            "               {:3}│{:6.4} ║ {:3}│{:6.4} ║ {:3}│{:6.4} ║ {:3}│{:6.4}",
            p,
            lq(p),
            180 + p,
            lq(180 + p),
            180 - p,
            lq(180 - p),
            360 - p,
            lq(360 - p),
        )?;
        if p % 3 == 0 && p < 90 {
            writeln!(
                out,
                "                  │       ║    │       ║    │       ║    │"
            )?;
        }
    }
    writeln!(out, "               ───┴───────╨────┴───────╨────┴───────╨────┴──────")
}

fn table10<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n             Table 10.--Values of Q for argument of constituent M₁\n\
         ═══╤═════╦═══╤═════╦═══╤═════╦═══╤═════╦═══╤═════╦═══╤═════╦═══╤═════╦═══╤═════\n\
         \x20P │  Q  ║ P │  Q  ║ P │  Q  ║ P │  Q  ║ P │  Q  ║ P │  Q  ║ P │  Q  ║ P │  Q\n\
         ───┼─────║───┼─────║───┼─────║───┼─────║───┼─────║───┼─────║───┼─────║───┼─────\n\
         \x20° │  °  ║ ° │  °  ║ ° │  °  ║ ° │  °  ║ ° │  °  ║ ° │  °  ║ ° │  °  ║ ° │  °"
    )?;
    for p in 0..=45u16 {
        let cell = |deg: u16| normalize(q(f64::from(deg)), 1);
        writeln!(
            out,
            "{:3}│{}║{:3}│{}║{:3}│{}║{:3}│{}║{:3}│{}║{:3}│{}║{:3}│{}║{:3}│{}",
            p,
            cell(p),
            p + 45,
            cell(p + 45),
            p + 90,
            cell(p + 90),
            p + 135,
            cell(p + 135),
            p + 180,
            cell(p + 180),
            p + 225,
            cell(p + 225),
            p + 270,
            cell(p + 270),
            p + 315,
            cell(p + 315),
        )?;
        if p % 3 == 0 && p < 45 {
            writeln!(
                out,
                "   │     ║   │     ║   │     ║   │     ║   │     ║   │     ║   │     ║   │"
            )?;
        }
    }
    writeln!(
        out,
        "───┴─────╨───┴─────╨───┴─────╨───┴─────╨───┴─────╨───┴─────╨───┴─────╨───┴─────"
    )
}

fn node_factor_row<W: Write>(out: &mut W, label: &str, tag: u8, first: u16) -> io::Result<()> {
    write!(out, "{label}")?;
    for year in first..first + 10 {
        let mid = midyear_longitudes(year_middle(year));
        let n = mid[MID_N];
        let i = inclination(n);
        let p = p_arg(mid[MID_P], xi(n));
        write!(out, "│{:5.3}", node_factor(tag, i, p, orbit::nu(n)))?;
    }
    writeln!(out)
}

fn node_factor_table<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\n    Table 14.--Node factor f for middle of each year, 1850 to 1999\n\
         \x20   (Not all figures agree with the printed tables to the quoted precision)"
    )?;
    for first in (1850..2000u16).step_by(10) {
        writeln!(
            out,
            "═══════════╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════╤═════"
        )?;
        write!(out, "Constituent")?;
        for year in first..first + 10 {
            write!(out, "│{year:5}")?;
        }
        writeln!(out)?;
        write!(out, "───────────")?;
        for _ in 0..10 {
            write!(out, "┼─────")?;
        }
        writeln!(out)?;
        let spacer = "           │     │     │     │     │     │     │     │     │     │";
        node_factor_row(out, "J₁         ", 76, first)?;
        node_factor_row(out, "K₁         ", 227, first)?;
        node_factor_row(out, "K₂         ", 235, first)?;
        writeln!(out, "{spacer}")?;
        node_factor_row(out, "L₂         ", 215, first)?;
        node_factor_row(out, "M₁         ", 206, first)?;
        writeln!(out, "{spacer}")?;
        node_factor_row(out, "M₂         ", 78, first)?;
        node_factor_row(out, "M₃         ", 149, first)?;
        writeln!(out, "{spacer}")?;
        node_factor_row(out, "O₁         ", 75, first)?;
        node_factor_row(out, "OO₁        ", 77, first)?;
        writeln!(out, "{spacer}")?;
        node_factor_row(out, "Mf         ", 74, first)?;
        node_factor_row(out, "Mm         ", 73, first)?;
    }
    Ok(())
}
