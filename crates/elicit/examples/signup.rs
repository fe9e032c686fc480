//! Example: Signup Flow
//!
//! Drives a two-form signup flow through the scripted transport: a
//! profile form first, then a confirmation form built from the
//! profile's answers.
//!
//! Run with:
//! ```bash
//! cargo run --example signup
//! ```

use std::sync::LazyLock;

use serde_json::{Map, Value, json};

use elicit::testing::ScriptedTransport;
use elicit::{
    BooleanField, ElicitResult, ElicitationSession, EnumChoice, EnumField, FieldSet, Form,
    IntegerField, StringField,
};

// ============================================================================
// Forms
// ============================================================================

static PROFILE_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
    FieldSet::builder()
        .field(
            "name",
            StringField::new("Your Name")
                .description("Please enter your full name")
                .min_length(1)
                .max_length(100),
        )
        .field(
            "age",
            IntegerField::new("Your Age")
                .description("Age in years")
                .minimum(0)
                .maximum(150),
        )
        .field(
            "plan",
            EnumField::new(
                "Plan",
                vec![
                    EnumChoice::new("FREE_TIER", "free"),
                    EnumChoice::new("PRO_TIER", "pro"),
                ],
            )
            .description("Which plan?")
            .optional()
            .default_value("free"),
        )
        .build()
});

struct ProfileForm;

impl Form for ProfileForm {
    fn fields(&self) -> &FieldSet {
        &PROFILE_FIELDS
    }

    fn message(&self) -> &str {
        "Please provide your signup details"
    }

    fn on_accepted(&self, data: &Map<String, Value>) -> ElicitResult<Option<Value>> {
        println!("profile accepted: {}", Value::Object(data.clone()));
        Ok(None)
    }
}

static CONFIRM_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
    FieldSet::builder()
        .field(
            "confirm",
            BooleanField::new("Confirm")
                .description("Is this information correct?")
                .optional()
                .default_value(true),
        )
        .build()
});

struct ConfirmationForm;

impl Form for ConfirmationForm {
    fn fields(&self) -> &FieldSet {
        &CONFIRM_FIELDS
    }

    fn on_declined(&self) -> ElicitResult<Option<Value>> {
        println!("signup abandoned");
        Ok(None)
    }
}

// ============================================================================
// Flow
// ============================================================================

#[tokio::main]
async fn main() -> ElicitResult<()> {
    // Stand-in for a real client: answers each request from a script.
    let transport = ScriptedTransport::with_script(Vec::new());
    transport.push_accept(json!({"name": "Ada Lovelace", "age": "36", "plan": "pro"}));
    transport.push_accept(json!({"confirm": true}));

    let mut profile = ElicitationSession::new(ProfileForm);
    let result = profile.elicit(&transport).await?;

    if result.declined_or_cancelled() {
        println!("no signup today");
        return Ok(());
    }

    let name = profile.get("name")?;
    let age = profile.get("age")?;
    let plan = profile.get("plan")?;

    let mut confirm = ElicitationSession::new(ConfirmationForm).with_message(format!(
        "Signing up {} (age {age}) on the {} plan. Correct?",
        name.as_str().unwrap_or_default(),
        plan.as_str().unwrap_or_default(),
    ));
    let confirmed = confirm.elicit(&transport).await?;

    if confirmed.accepted() && confirm.get("confirm")? == json!(true) {
        println!("signup complete");
    } else {
        println!("signup not confirmed");
    }

    Ok(())
}
