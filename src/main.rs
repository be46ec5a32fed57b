use miette::Result;

/// Entry point for the depviz CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for rich diagnostics
    miette::set_panic_hook();

    depviz::run()
}
