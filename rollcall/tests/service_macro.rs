//! `#[rollcall::service]` generated metadata, checked end to end.
#![cfg(feature = "macros")]

use rollcall::{
    Configuration, ConfigurationChecker, Container, ErrorKind, ListenerResult, Object, Value,
};

#[derive(Default)]
struct Mailer {
    sender: String,
}

#[rollcall::service]
impl Mailer {
    pub fn send_welcome(&self, _args: &[Value]) -> ListenerResult {
        Ok(Value::from(self.sender.clone()))
    }

    pub fn render(args: &[Value]) -> ListenerResult {
        Ok(Value::Int(args.len() as i64))
    }

    fn helper(&self) -> usize {
        self.sender.len()
    }
}

struct Audit;

#[rollcall::service(name = "audit.log")]
impl Audit {
    pub fn invoke(&self, _args: &[Value]) -> ListenerResult {
        Ok(Value::Bool(true))
    }
}

fn container() -> Container {
    Container::builder()
        .service(
            Mailer::descriptor(),
            Mailer {
                sender: "noreply".to_string(),
            },
        )
        .service(Audit::descriptor(), Audit)
        .build()
}

#[test]
fn test_descriptor_lists_public_methods() {
    let descriptor = Mailer::descriptor();
    assert_eq!(descriptor.name(), "Mailer");
    assert!(descriptor.has_method("send_welcome"));
    assert!(descriptor.has_method("render"));
    assert!(!descriptor.has_method("helper"));
    assert!(descriptor.static_method_fn("render").is_some());
    assert!(descriptor.static_method_fn("send_welcome").is_none());
    assert!(!descriptor.is_invokable());
    assert_eq!(Mailer::default().helper(), 0);
}

#[test]
fn test_entry_point_makes_service_invokable() {
    assert!(Audit::descriptor().is_invokable());
    assert_eq!(Audit.class_name(), "audit.log");
    assert!(Audit.as_invoke().is_some());
    assert!(Mailer::default().as_invoke().is_none());
}

#[test]
fn test_generated_object_dispatches_methods() {
    let mailer = Mailer {
        sender: "ops".to_string(),
    };
    assert_eq!(
        mailer.call_method("send_welcome", &[]).unwrap().as_str(),
        Some("ops")
    );
    assert!(matches!(
        mailer.call_method("render", &[Value::Null]).unwrap(),
        Value::Int(1)
    ));
    assert!(mailer.call_method("helper", &[]).is_err());
}

#[test]
fn test_generated_services_pass_the_checker() {
    let configuration = Configuration::new()
        .on("user.created", vec![Value::pair("Mailer", "send_welcome")])
        .on("user.audited", vec![Value::from("audit.log")])
        .on("user.rendered", vec![Value::pair("Mailer", "render")]);

    assert!(ConfigurationChecker::new(container()).check(&configuration).is_ok());
}

#[test]
fn test_generated_services_fail_like_hand_written_ones() {
    let checker = ConfigurationChecker::new(container());

    let err = checker
        .check(&Configuration::new().on("user.created", vec![Value::pair("Mailer", "helper")]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingMethod);

    let err = checker
        .check(&Configuration::new().on("user.created", vec![Value::from("Mailer")]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "\"__invoke\" method is not defined in \"Mailer\" class."
    );
}
