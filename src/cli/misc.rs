use vecu_cockpit::{
    context::Context,
    fmi::{MODEL_GUID, MODEL_IDENTIFIER},
    structures::variable::{
        references::{boolean, integer},
        Causality, VariableKind, MODEL_VARIABLES,
    },
    types::err::ErrorKind,
};

use crate::parse::config::HostOptions;

/// Prints the declared variables, one per line.
pub fn print_variables() {
    println!("c {MODEL_IDENTIFIER} {MODEL_GUID}");
    for declaration in &MODEL_VARIABLES {
        println!(
            "{:<36} {:<8} {:<7} {:>2}  {}",
            declaration.name,
            declaration.kind.to_string(),
            declaration.causality.to_string(),
            declaration.reference,
            declaration.description
        );
    }
}

/// Writes any inputs given to the host, as one integer batch and one boolean batch.
pub fn apply_inputs(the_context: &mut Context, options: &HostOptions) -> Result<(), ErrorKind> {
    let mut integer_references = Vec::default();
    let mut integer_values = Vec::default();

    for (reference, value) in [
        (integer::IN_USER_CONFIRM_AIRBAG_STATE, options.user_confirm),
        (integer::IN_PASSENGER_AIRBAG_WARNING_STATE, options.warning_state),
    ] {
        if let Some(value) = value {
            integer_references.push(reference);
            integer_values.push(value);
        }
    }

    let mut boolean_references = Vec::default();
    let mut boolean_values = Vec::default();

    for (reference, value) in [
        (boolean::IN_PASSENGER_AIRBAG_DISABLE_LAMP, options.disable_lamp),
        (boolean::IN_PASSENGER_AIRBAG_ENABLE_LAMP, options.enable_lamp),
    ] {
        if let Some(value) = value {
            boolean_references.push(reference);
            boolean_values.push(value);
        }
    }

    the_context.set_integers(&integer_references, &integer_values)?;
    the_context.set_booleans(&boolean_references, &boolean_values)?;
    Ok(())
}

/// Each output, as `name=value` pairs.
pub fn output_line(the_context: &Context) -> Result<String, ErrorKind> {
    let mut pairs = Vec::default();

    for declaration in MODEL_VARIABLES
        .iter()
        .filter(|declaration| declaration.causality == Causality::Output)
    {
        let value = match declaration.kind {
            VariableKind::Integer => the_context.get_integer(declaration.reference)?.to_string(),
            VariableKind::Boolean => the_context.get_boolean(declaration.reference)?.to_string(),
        };
        pairs.push(format!("{}={value}", declaration.name));
    }

    Ok(pairs.join(" "))
}
