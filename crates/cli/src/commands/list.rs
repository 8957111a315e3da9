use anyhow::Result;
use smellguard::config::DetectorSettings;

pub fn run() -> Result<()> {
    let smell_types = smellguard_detectors::smell_types();

    println!("{:<24} {:<28} Description", "Name", "Contexts");
    println!("{}", "-".repeat(90));

    for smell_type in &smell_types {
        let detector = smell_type.instantiate(DetectorSettings::default());
        let contexts: Vec<String> = detector.contexts().iter().map(|c| c.to_string()).collect();
        println!(
            "{:<24} {:<28} {}",
            smell_type.name,
            contexts.join(", "),
            smell_type.description
        );
    }

    println!("\nTotal: {} detectors", smell_types.len());
    Ok(())
}
