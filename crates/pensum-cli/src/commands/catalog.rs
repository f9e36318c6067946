use pensum_core::catalog::{self, builtin};
use std::path::Path;

use crate::CatalogKind;

pub fn list() -> Result<(), pensum_core::error::PensumError> {
    let catalog = builtin::load()?;
    println!(
        "{} (v{}), {} domains, {} theories\n",
        catalog.theories().name,
        catalog.theories().version,
        catalog.theories().domains.len(),
        catalog.total_theories()
    );
    for (domain, theories) in &catalog.theories().domains {
        let marker = if *domain == catalog.theories().default_domain {
            " (default)"
        } else {
            ""
        };
        println!("  {:<24} {:>2} theories{}", domain, theories.len(), marker);
    }
    Ok(())
}

pub fn explain(domain: &str) -> Result<(), pensum_core::error::PensumError> {
    let catalog = builtin::load()?;
    let key = domain.to_lowercase();
    if !catalog.theories().domains.contains_key(&key) {
        println!(
            "'{}' is not a catalog domain; problems of this type use '{}':\n",
            domain, catalog.theories().default_domain
        );
    } else {
        println!("{}:\n", key);
    }
    for (i, theory) in catalog.theories_for(&key).iter().enumerate() {
        println!("  {:>2}. {}", i + 1, theory);
    }
    Ok(())
}

pub fn templates() -> Result<(), pensum_core::error::PensumError> {
    let catalog = builtin::load()?;
    let table = catalog.templates();
    println!("{} (v{})\n", table.name, table.version);
    for (key, template) in &table.templates {
        let marker = if *key == table.default_template {
            " (default)"
        } else {
            ""
        };
        println!("  {:<12} {}{}", key, template.title, marker);
        for (i, step) in template.steps.iter().enumerate() {
            println!("      {}. {}", i + 1, step.title);
        }
        println!();
    }
    Ok(())
}

pub fn validate(file: &Path, kind: CatalogKind) -> Result<(), pensum_core::error::PensumError> {
    match kind {
        CatalogKind::Theories => {
            let def = catalog::load_theories(file)?;
            println!("Theory catalog '{}' (v{}) is valid.", def.name, def.version);
            println!("  Domains: {}", def.domains.len());
            if !def.domains.contains_key(&def.default_domain) {
                println!(
                    "\nWarnings:\n  - default domain '{}' has no entry; unknown subjects get no theories",
                    def.default_domain
                );
            }
        }
        CatalogKind::Templates => {
            let def = catalog::load_templates(file)?;
            println!("Template table '{}' (v{}) is valid.", def.name, def.version);
            println!(
                "  Templates: {}",
                def.templates.keys().cloned().collect::<Vec<_>>().join(", ")
            );
            if def.methodology.is_empty() {
                println!("\nWarnings:\n  - no methodology steps; cliff notes will omit them");
            }
        }
        CatalogKind::Formulas => {
            let def = catalog::load_formulas(file)?;
            println!("Formula table '{}' (v{}) is valid.", def.name, def.version);
            println!(
                "  Groups: {}",
                def.groups.keys().cloned().collect::<Vec<_>>().join(", ")
            );
        }
    }
    Ok(())
}
