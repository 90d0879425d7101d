use tidal_constituents::builder::basic;
use tidal_constituents::YearSpan;
use tidal_core::format::normalize;

fn main() {
    let span = YearSpan::new(2020, 2029, 1900);
    let m2 = basic(
        "M₂",
        &[2.0, -2.0, 2.0, 0.0, 0.0, 0.0],
        &[2.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        78,
        span,
    );

    println!("{}  {:.7}°/hour\n", m2.name, m2.speed);
    println!("year  V₀+u     f");
    for (i, (vpu, f)) in m2.vpu.iter().zip(&m2.f).enumerate() {
        println!(
            "{}  {}  {:6.4}",
            span.first_year + i as u16,
            normalize(*vpu, 2),
            f,
        );
    }
}
