pub fn run() -> anyhow::Result<()> {
    println!("thinkers {}", env!("CARGO_PKG_VERSION"));
    println!("Essay and questionnaire generation about thinkers' ideas on meaning");
    Ok(())
}
