//! Functions command implementation

use crate::catalog::CatalogFunction;
use crate::Result;

/// Run the functions command
pub fn run() -> Result<()> {
    println!("{:<16} {:<8} Formula", "Name", "Dim");
    println!("------------------------------------------------------");
    for function in CatalogFunction::ALL {
        let dim = function
            .arity()
            .map_or_else(|| "any".to_string(), |n| n.to_string());
        println!("{:<16} {:<8} {}", function.name(), dim, function.formula());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functions_run() {
        assert!(run().is_ok());
    }
}
