//! Downsampling walkthrough: insert a noisy signal, aggregate it into
//! fixed-width windows, and export the raw points as CSV.

use tidemark::{SeriesStore, write_series_csv};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = SeriesStore::new();

    // A 10-second signal sampled every 250 ms, with a gap in the middle.
    for i in 0..40i64 {
        let ts = i * 250;
        if (4_000..6_000).contains(&ts) {
            continue;
        }
        let value = (ts as f64 / 1_000.0).sin() * 10.0 + 50.0;
        store.insert("demo.signal", ts, value);
    }
    println!(
        "inserted {} points into 'demo.signal'\n",
        store.len("demo.signal")
    );

    // One-second windows over the full range.
    println!("{:>8}  {:>10}  {:>5}", "start", "average", "count");
    for window in store.aggregate("demo.signal", 0, 9_999, 1_000)? {
        match window.average {
            Some(average) => {
                println!("{:>8}  {:>10.3}  {:>5}", window.start, average, window.count);
            }
            None => println!("{:>8}  {:>10}  {:>5}", window.start, "(no data)", window.count),
        }
    }

    // Downsampled view: empty windows come back as 0.0.
    println!("\ndownsampled:");
    for point in store.downsample("demo.signal", 0, 9_999, 1_000)? {
        println!("{:>8}  {:>10.3}", point.timestamp_ms, point.value);
    }

    // Raw CSV export, insertion order.
    let mut csv = Vec::new();
    write_series_csv(&store, "demo.signal", &mut csv)?;
    println!("\nCSV export: {} bytes, first rows:", csv.len());
    for line in String::from_utf8(csv)?.lines().take(4) {
        println!("  {line}");
    }

    Ok(())
}
