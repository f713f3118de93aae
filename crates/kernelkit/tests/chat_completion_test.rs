mod common;

use common::{StubTransports, spawn_stub};
use kernelkit::{
    ChatHistory, ChatRole, CoreError, InMemorySettings, KernelFactory, KernelKitError, Settings,
};

fn settings_without_key() -> InMemorySettings {
    InMemorySettings::new(Settings::new(false, "llama3", "", "", ""))
}

#[tokio::test]
async fn test_reply_is_assistant_message() {
    let (origin, _) = spawn_stub().await;
    let kernel = KernelFactory::new(settings_without_key(), StubTransports::new(&origin))
        .build_kernel()
        .unwrap();

    let mut history = ChatHistory::new();
    history.add_user("first");
    history.add_assistant("ok");
    history.add_user("second");

    let reply = kernel.complete(&history).await.unwrap();
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.content, "echo: second");
}

#[tokio::test]
async fn test_empty_key_and_org_send_no_credentials() {
    let (origin, captured) = spawn_stub().await;
    let kernel = KernelFactory::new(settings_without_key(), StubTransports::new(&origin))
        .build_kernel()
        .unwrap();

    kernel.invoke_prompt("hi").await.unwrap();

    let request = &captured.requests()[0];
    assert_eq!(request.header("authorization"), None);
    assert_eq!(request.header("openai-organization"), None);
    assert_eq!(request.body["messages"][0]["role"], "user");
    assert_eq!(request.body["messages"][0]["content"], "hi");
}

#[tokio::test]
async fn test_error_status_becomes_service_error() {
    let (origin, _) = spawn_stub().await;
    let kernel = KernelFactory::new(
        settings_without_key(),
        StubTransports::with_prefix(&origin, "/broken"),
    )
    .build_kernel()
    .unwrap();

    let err = kernel.invoke_prompt("hi").await.unwrap_err();
    match err {
        CoreError::Service(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("model not loaded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_response_without_choices_is_invalid() {
    let (origin, _) = spawn_stub().await;
    let kernel = KernelFactory::new(
        settings_without_key(),
        StubTransports::with_prefix(&origin, "/empty"),
    )
    .build_kernel()
    .unwrap();

    let err = kernel.invoke_prompt("hi").await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_on_invoke_not_build() {
    let kernel = KernelFactory::new(
        settings_without_key(),
        StubTransports::new("http://127.0.0.1:1"),
    )
    .build_kernel()
    .unwrap();

    let err: KernelKitError = kernel.invoke_prompt("hi").await.unwrap_err().into();
    assert!(matches!(err, KernelKitError::Core(CoreError::Service(_))));
}
