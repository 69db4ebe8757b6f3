//! wpmake's main application entry point and orchestration logic.
//! Runs the generation pipeline: answers, identifiers, manifest,
//! materialization and package installs.

use log::debug;
use wpmake::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    identifier::DerivedIdentifiers,
    identity::GitIdentity,
    installer::{run_installers, summarize},
    loader::load_template_roots,
    logger::init_logger,
    manifest::{resolve_manifest, MANIFEST},
    options::Variables,
    parser::{collect_answers, get_answers_from},
    processor::Processor,
    prompt::{DefaultsPrompter, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates the template roots
/// 2. Collects answers (preloaded, prompted or defaulted)
/// 3. Derives the file slug and namespace
/// 4. Resolves the manifest destinations
/// 5. Materializes every manifest entry
/// 6. Runs the package installers
fn run(args: Args) -> Result<()> {
    println!("Thanks for generating with WP Make!");

    let template_roots = load_template_roots(args.template_dir())?;
    let preloaded = get_answers_from(args.stdin, args.answers.as_deref())?;

    let prompter: Box<dyn Prompter> = if args.defaults {
        Box::new(DefaultsPrompter::new())
    } else {
        Box::new(DialoguerPrompter::new())
    };
    let identity = GitIdentity::from_git_config();
    let options = collect_answers(&*prompter, &identity, &preloaded)?;

    let identifiers = DerivedIdentifiers::derive(options.project_title())?;
    debug!(
        "Derived file slug '{}' and namespace '{}'",
        identifiers.file_slug(),
        identifiers.namespace()
    );
    let variables = Variables::new(&options, &identifiers);

    let entries = resolve_manifest(MANIFEST, &template_roots, &variables)?;

    let engine = MiniJinjaRenderer::new();
    let processor = Processor::new(&engine, &args.output_dir, &variables);
    for entry in &entries {
        let result = processor.process(entry)?;
        println!("{}: '{}'", result.action, result.target.display());
    }

    println!("Your theme has been generated.");

    let reports = run_installers(&args.install_tasks(), &args.output_dir)?;
    if !reports.is_empty() {
        println!("{}", summarize(&reports));
    }

    Ok(())
}
