//! Human readable summary of a host API manifest.

use nvgen_core::BindingSet;
use nvgen_manifest::ApiManifest;

/// Print functions with both signature views, then the data and error type
/// tables. Invalid functions were already dropped by the driver.
pub fn print_api(manifest: &ApiManifest, bindings: &BindingSet) {
    println!("Functions");
    for fun in &bindings.functions {
        let sig = fun.signature();
        let real = fun.real_signature();
        println!("\t{sig}");
        if sig != real {
            println!("\t[aka {real}]\n");
        }
    }
    println!();

    println!("Data Types");
    for (name, decl) in &manifest.types {
        println!("\t{name}:{}", decl.id);
    }
    println!();

    println!("Error Types");
    for (name, decl) in &manifest.error_types {
        println!("\t{name}:{}", decl.id);
    }
    println!();
}
