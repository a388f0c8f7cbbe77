use crate::{
    cli::{
        answers::collect_variables,
        args::{
            Commands, CreateClassArgs, CreatePackageArgs, CreateTestArgs, InfoArgs,
            RenderArgs,
        },
    },
    constants::DATE_VARIABLE,
    engine::TemplateEngine,
    error::Result,
    generator::{ClassRequest, Generator, PackageRequest, TestRequest},
    store::TemplateStore,
};
use std::path::PathBuf;

/// CLI runner: seeds the store once, then dispatches a single command.
pub struct Runner {
    templates_dir: Option<PathBuf>,
}

impl Runner {
    pub fn new(templates_dir: Option<PathBuf>) -> Self {
        Self { templates_dir }
    }

    /// Executes one command against a freshly seeded template store.
    pub fn run(self, command: Commands) -> Result<()> {
        let store = match self.templates_dir {
            Some(dir) => TemplateStore::with_dir(dir),
            None => TemplateStore::new()?,
        };
        log::debug!("Using template store at {}", store.root().display());
        store.ensure_defaults()?;

        let generator = Generator::new(TemplateEngine::new(&store));

        match command {
            Commands::List => list(&generator),
            Commands::CreatePackage(args) => create_package(&generator, args),
            Commands::CreateClass(args) => create_class(&generator, args),
            Commands::CreateTest(args) => create_test(&generator, args),
            Commands::Render(args) => render(&generator, args),
            Commands::Info(args) => info(&generator, args),
        }
    }
}

fn list(generator: &Generator) -> Result<()> {
    let mut templates = generator.list_templates()?;
    templates.sort();
    println!("Available templates:");
    for template in templates {
        println!("  - {template}");
    }
    Ok(())
}

fn create_package(generator: &Generator, args: CreatePackageArgs) -> Result<()> {
    let request = PackageRequest { name: args.name, author: args.author, output_dir: args.output };
    let package_dir = generator.create_package(&request)?;
    println!("Package '{}' created at {}", request.name, package_dir.display());
    Ok(())
}

fn create_class(generator: &Generator, args: CreateClassArgs) -> Result<()> {
    let request = ClassRequest {
        class_name: args.name,
        module_name: args.module,
        output_dir: args.output,
        constructor_params: args.constructor_params,
        constructor_body: args.constructor_body,
    };
    let target = generator.create_class(&request)?;
    println!("Class '{}' created at {}", request.class_name, target.display());
    Ok(())
}

fn create_test(generator: &Generator, args: CreateTestArgs) -> Result<()> {
    let request =
        TestRequest { class_name: args.name, module_name: args.module, output_dir: args.output };
    let target = generator.create_test(&request)?;
    println!("Test file for '{}' created at {}", request.class_name, target.display());
    Ok(())
}

fn render(generator: &Generator, args: RenderArgs) -> Result<()> {
    let variables =
        collect_variables(args.answers_file.as_deref(), args.answers.as_deref(), &args.vars)?;
    let content =
        generator.create_from_template(&args.template, args.output.as_deref(), &variables)?;
    match args.output {
        Some(path) => println!("Template '{}' rendered to {}", args.template, path.display()),
        None => print!("{content}"),
    }
    Ok(())
}

fn info(generator: &Generator, args: InfoArgs) -> Result<()> {
    let engine = generator.engine();
    let placeholders = engine.placeholders(&args.template)?;
    println!("Template: {}", args.template);
    println!("Path: {}", engine.resolve(&args.template).display());
    println!("Placeholders:");
    for name in placeholders {
        if name == DATE_VARIABLE {
            println!("  - {name} (defaults to today)");
        } else {
            println!("  - {name}");
        }
    }
    Ok(())
}

/// Main entry point for CLI execution
pub fn run(templates_dir: Option<PathBuf>, command: Commands) -> Result<()> {
    Runner::new(templates_dir).run(command)
}
