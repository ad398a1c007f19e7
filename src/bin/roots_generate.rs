use approx_roots::{search_magic, MagicReport, RootFloat, SearchConfig};
use tracing_subscriber::EnvFilter;

fn search_width<T: RootFloat>(config: &SearchConfig) -> Vec<MagicReport> {
    vec![
        search_magic::<2, T>(config),
        search_magic::<3, T>(config),
        search_magic::<4, T>(config),
        search_magic::<5, T>(config),
        search_magic::<6, T>(config),
        search_magic::<7, T>(config),
        search_magic::<8, T>(config),
        search_magic::<9, T>(config),
        search_magic::<10, T>(config),
    ]
}

fn print_comparison(reports: &[MagicReport]) {
    println!(
        "{:<5} {:>3}  {:>20} {:>11}  {:>20} {:>11}  {:>6}",
        "type", "n", "found", "error", "published", "error", "gain"
    );
    for r in reports {
        println!(
            "{:<5} {:>3}  {:>#20x} {:>11.4e}  {:>#20x} {:>11.4e}  {:>6.2}",
            r.width.to_string(),
            r.degree,
            r.magic,
            r.max_rel_error,
            r.published,
            r.published_error,
            r.improvement()
        );
    }
}

fn print_table(reports: &[MagicReport]) {
    println!("pub const MAGIC: MagicTable = MagicTable {{");
    for (field, width) in [("single", 32u32), ("double", 64)] {
        println!("    {field}: [");
        for r in reports.iter().filter(|r| r.width.bits() == width) {
            let digits = (width / 4) as usize;
            println!("        0x{:0digits$x}, // {}", r.magic, r.degree);
        }
        println!("    ],");
    }
    println!("}};");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = SearchConfig::default();
    if let Some(samples) = std::env::args().nth(1) {
        config.samples = samples.parse()?;
    }

    println!("Searching magic constants ({} samples per period)", config.samples);
    let mut reports = search_width::<f32>(&config);
    reports.extend(search_width::<f64>(&config));

    print_comparison(&reports);
    println!();
    print_table(&reports);

    #[cfg(feature = "serde")]
    println!("{}", approx_roots::reports_to_json(&reports)?);

    Ok(())
}
