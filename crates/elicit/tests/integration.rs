//! End-to-end tests for the elicitation engine.
//!
//! These drive whole sessions through the scripted transport, covering
//! the accept/decline/cancel outcomes, validation rejection, capability
//! fallback, form inheritance, and multi-form chaining.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

use serde_json::{Map, Value, json};

use elicit::testing::ScriptedTransport;
use elicit::{
    BooleanField, ElicitError, ElicitResult, ElicitationSession, EnumChoice, EnumField, FieldSet,
    Form, IntegerField, SessionOutcome, StringField,
};

// ============================================================================
// Forms under test
// ============================================================================

static NAME_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
    FieldSet::builder()
        .field(
            "name",
            StringField::new("Your Name")
                .description("Please enter your full name")
                .min_length(1),
        )
        .build()
});

#[derive(Default)]
struct NameForm {
    accepted_calls: AtomicU32,
    declined_calls: AtomicU32,
}

impl Form for NameForm {
    fn fields(&self) -> &FieldSet {
        &NAME_FIELDS
    }

    fn message(&self) -> &str {
        "Please tell me your name"
    }

    fn on_accepted(&self, data: &Map<String, Value>) -> ElicitResult<Option<Value>> {
        self.accepted_calls.fetch_add(1, Ordering::SeqCst);
        let name = data["name"].as_str().unwrap_or_default();
        Ok(Some(json!(format!("Hello {name}!"))))
    }

    fn on_declined(&self) -> ElicitResult<Option<Value>> {
        self.declined_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Some(json!("No problem!")))
    }
}

static PERSON_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
    FieldSet::builder()
        .field("name", StringField::new("Name").description("Your name"))
        .field(
            "age",
            IntegerField::new("Age").description("Your age").minimum(0),
        )
        .build()
});

struct PersonInfoForm;

impl Form for PersonInfoForm {
    fn fields(&self) -> &FieldSet {
        &PERSON_FIELDS
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
}

// ============================================================================
// Accept / decline / cancel
// ============================================================================

#[tokio::test]
async fn accept_flow_returns_cleaned_data_and_hook_value() {
    let transport = ScriptedTransport::accepting(json!({"name": "Alice"}));
    let mut session = ElicitationSession::new(NameForm::default());

    let result = session.elicit(&transport).await.unwrap();

    assert!(result.accepted());
    assert_eq!(result.data().unwrap()["name"], json!("Alice"));
    assert_eq!(result.hook_value(), Some(&json!("Hello Alice!")));
    assert_eq!(session.get("name").unwrap(), json!("Alice"));
    assert_eq!(session.form().accepted_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn decline_flow_has_no_data_and_runs_hook_once() {
    let transport = ScriptedTransport::declining();
    let mut session = ElicitationSession::new(NameForm::default());

    let result = session.elicit(&transport).await.unwrap();

    assert!(result.declined());
    assert!(result.data().is_none());
    assert_eq!(result.hook_value(), Some(&json!("No problem!")));
    assert_eq!(session.outcome(), SessionOutcome::Declined);
    assert!(session.cleaned_data().is_empty());
    assert_eq!(session.form().declined_calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.form().accepted_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cancel_flow_has_no_data() {
    let transport = ScriptedTransport::cancelling();
    let mut session = ElicitationSession::new(NameForm::default());

    let result = session.elicit(&transport).await.unwrap();

    assert!(result.cancelled());
    assert!(result.declined_or_cancelled());
    assert!(result.data().is_none());
    assert_eq!(session.outcome(), SessionOutcome::Cancelled);
}

// ============================================================================
// Validation rejection
// ============================================================================

#[tokio::test]
async fn accept_missing_a_required_field_is_a_validation_error() {
    // Content omits the required name entirely.
    let transport = ScriptedTransport::accepting(json!({}));
    let mut session = ElicitationSession::new(NameForm::default());

    let err = session.elicit(&transport).await.unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("Your Name is required"));
    assert_eq!(session.outcome(), SessionOutcome::Pending);
    assert!(session.cleaned_data().is_empty());
    assert_eq!(session.form().accepted_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn validation_error_carries_every_failing_field() {
    static STRICT_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
        FieldSet::builder()
            .field(
                "email",
                StringField::new("Email")
                    .description("Valid email address")
                    .pattern(r"^[^@]+@[^@]+\.[^@]+$"),
            )
            .field("age", IntegerField::new("Age").minimum(18).maximum(100))
            .build()
    });

    struct StrictForm;
    impl Form for StrictForm {
        fn fields(&self) -> &FieldSet {
            &STRICT_FIELDS
        }
    }

    let transport = ScriptedTransport::accepting(json!({
        "email": "not-an-email",
        "age": 15,
    }));
    let mut session = ElicitationSession::new(StrictForm);

    let err = session.elicit(&transport).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("format is invalid"));
    assert!(message.contains("must be at least 18"));
}

// ============================================================================
// Capability fallback
// ============================================================================

#[tokio::test]
async fn unsupported_client_surfaces_a_distinct_error_kind() {
    let transport = ScriptedTransport::unsupported();
    let mut session = ElicitationSession::new(NameForm::default());

    let err = session.elicit(&transport).await.unwrap_err();

    // Callers can offer a fallback path instead of retrying.
    assert!(err.is_unsupported());
    assert!(!matches!(err, ElicitError::Transport(_)));
    assert_eq!(session.outcome(), SessionOutcome::Pending);
}

// ============================================================================
// Form chaining
// ============================================================================

#[tokio::test]
async fn two_forms_chain_through_one_transport() {
    let transport = ScriptedTransport::with_script(Vec::new());
    transport.push_accept(json!({"name": "Bob", "age": 25}));
    transport.push_accept(json!({"confirm": true}));

    let mut info = ElicitationSession::new(PersonInfoForm)
        .with_message("Please provide your information");
    let info_result = info.elicit(&transport).await.unwrap();
    assert!(info_result.accepted());

    let name = info.get("name").unwrap();
    let age = info.get("age").unwrap();

    let mut confirm = ElicitationSession::new(ConfirmationForm).with_message(format!(
        "You entered: {}, age {}. Is this correct?",
        name.as_str().unwrap_or_default(),
        age
    ));
    let confirm_result = confirm.elicit(&transport).await.unwrap();

    assert!(confirm_result.accepted());
    assert_eq!(confirm.get("confirm").unwrap(), json!(true));
    assert_eq!(transport.request_count(), 2);

    let requests = transport.requests();
    assert_eq!(requests[0].0, "Please provide your information");
    assert_eq!(requests[1].0, "You entered: Bob, age 25. Is this correct?");
}

// ============================================================================
// Inheritance and enum forms
// ============================================================================

#[tokio::test]
async fn extended_form_carries_ancestor_fields_in_order() {
    static BASE_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
        FieldSet::builder()
            .field("name", StringField::new("Name").description("Base name field"))
            .field(
                "choice",
                EnumField::new(
                    "Choice",
                    vec![
                        EnumChoice::new("OPTION_1", "opt1"),
                        EnumChoice::new("OPTION_2", "opt2"),
                    ],
                ),
            )
            .build()
    });

    static EXTENDED_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
        FieldSet::builder()
            .extend(&BASE_FIELDS)
            .field("email", StringField::new("Email").description("Email address"))
            .field("age", IntegerField::new("Age").minimum(0))
            .build()
    });

    struct ExtendedForm;
    impl Form for ExtendedForm {
        fn fields(&self) -> &FieldSet {
            &EXTENDED_FIELDS
        }
    }

    let transport = ScriptedTransport::declining();
    let mut session = ElicitationSession::new(ExtendedForm);
    session.elicit(&transport).await.unwrap();

    let requests = transport.requests();
    let schema = &requests[0].1;
    let props = schema["properties"].as_object().unwrap();
    assert_eq!(props.len(), 4);

    let keys: Vec<&String> = props.keys().collect();
    assert_eq!(keys, ["name", "choice", "email", "age"]);

    assert_eq!(props["choice"]["enum"], json!(["opt1", "opt2"]));
    assert_eq!(props["choice"]["enumNames"], json!(["Option 1", "Option 2"]));
}

#[tokio::test]
async fn enum_form_round_trip_is_case_sensitive() {
    static STATUS_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
        FieldSet::builder()
            .field(
                "status",
                EnumField::new(
                    "Status",
                    vec![
                        EnumChoice::new("ACTIVE", "active"),
                        EnumChoice::new("INACTIVE", "inactive"),
                        EnumChoice::new("PENDING", "pending"),
                    ],
                )
                .description("Current status"),
            )
            .build()
    });

    struct StatusForm;
    impl Form for StatusForm {
        fn fields(&self) -> &FieldSet {
            &STATUS_FIELDS
        }
    }

    // Exact value is accepted.
    let transport = ScriptedTransport::accepting(json!({"status": "active"}));
    let mut session = ElicitationSession::new(StatusForm);
    let result = session.elicit(&transport).await.unwrap();
    assert_eq!(result.data().unwrap()["status"], json!("active"));

    // A value differing only in case is rejected.
    let transport = ScriptedTransport::accepting(json!({"status": "ACTIVE"}));
    let mut session = ElicitationSession::new(StatusForm);
    let err = session.elicit(&transport).await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("must be one of"));
}

// ============================================================================
// Coercion through a whole session
// ============================================================================

#[tokio::test]
async fn string_typed_numbers_coerce_during_accept() {
    static BOUNDED_FIELDS: LazyLock<FieldSet> = LazyLock::new(|| {
        FieldSet::builder()
            .field("age", IntegerField::new("Age").minimum(0).maximum(150))
            .build()
    });

    struct BoundedForm;
    impl Form for BoundedForm {
        fn fields(&self) -> &FieldSet {
            &BOUNDED_FIELDS
        }
    }

    let transport = ScriptedTransport::accepting(json!({"age": "30"}));
    let mut session = ElicitationSession::new(BoundedForm);
    let result = session.elicit(&transport).await.unwrap();

    // "30" arrived as a string, the cleaned value is the integer 30.
    assert_eq!(result.data().unwrap()["age"], json!(30));

    let transport = ScriptedTransport::accepting(json!({"age": 200}));
    let mut session = ElicitationSession::new(BoundedForm);
    let err = session.elicit(&transport).await.unwrap_err();
    assert!(err.to_string().contains("must be at most 150"));
}

// ============================================================================
// Zero-field forms
// ============================================================================

#[tokio::test]
async fn zero_field_form_compiles_and_accepts_empty_content() {
    static EMPTY_FIELDS: LazyLock<FieldSet> = LazyLock::new(FieldSet::empty);

    struct EmptyForm;
    impl Form for EmptyForm {
        fn fields(&self) -> &FieldSet {
            &EMPTY_FIELDS
        }
    }

    let transport = ScriptedTransport::accepting(json!({}));
    let mut session = ElicitationSession::new(EmptyForm);
    let result = session.elicit(&transport).await.unwrap();

    assert!(result.accepted());
    assert!(result.data().unwrap().is_empty());

    let requests = transport.requests();
    assert_eq!(requests[0].1["properties"], json!({}));
    assert!(requests[0].1.get("required").is_none());
}
