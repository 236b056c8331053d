use strato_common::{InstanceRecord, RegistrationRecord};
use strato_console::CategoryLists;

pub fn print_instances(lists: &CategoryLists) {
    println!("\n=== Running Instances ===");
    print_category("LLM", &lists.llm);
    print_category("Embedding", &lists.embedding);
    print_category("Rerank", &lists.rerank);
    print_category("Image", &lists.image);
    println!();
}

fn print_category(title: &str, instances: &[InstanceRecord]) {
    println!("\n[{title}]");
    if instances.is_empty() {
        println!("  (none)");
        return;
    }
    println!(
        "  {:<38} {:<30} {:<22} {:<8} {:<10}",
        "UID", "Name", "Address", "Size(B)", "Quant"
    );
    for instance in instances {
        let size = instance
            .model_size_in_billions
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<38} {:<30} {:<22} {:<8} {:<10}",
            instance.model_uid,
            instance.model_name,
            instance.address.as_deref().unwrap_or("N/A"),
            size,
            instance.quantization.as_deref().unwrap_or("-"),
        );
    }
}

pub fn print_registrations(registrations: &[RegistrationRecord]) {
    println!("\n=== Model Registrations ===\n");
    if registrations.is_empty() {
        println!("No registrations matched.");
        return;
    }
    println!(
        "{:<30} {:<25} {:<9} {:<40}",
        "Name", "Abilities", "Builtin", "Description"
    );
    println!("{:-<110}", "");
    for reg in registrations {
        println!(
            "{:<30} {:<25} {:<9} {:<40}",
            reg.model_name,
            reg.model_ability.join(","),
            if reg.is_builtin { "yes" } else { "no" },
            reg.model_description.as_deref().unwrap_or(""),
        );
    }
    println!();
}
