//! Integration tests for the generic request dispatcher.

mod common;

use common::{
    AttributeReportingExceptionHandler, EchoHandler, MutatingFailingHandler, Orphan,
    RefusingAdapter, TestInput,
};
use skillkit_core::{
    ConfigurationError, DispatchError, FnResponseInterceptor, HandlerChain, RequestDispatcher,
};
use skillkit_std::{
    adapter::GenericHandlerAdapter,
    dispatcher::GenericRequestDispatcher,
    mapping::{GenericExceptionMapper, GenericRequestMapper},
    testing::{CallLog, CountingHandler, RecordingInterceptor, ScriptedExceptionHandler},
};

type Chain = HandlerChain<TestInput, String>;
type Dispatcher = GenericRequestDispatcher<TestInput, String>;

fn mapper_for(chains: Vec<Chain>) -> GenericRequestMapper<TestInput, String> {
    chains
        .into_iter()
        .fold(GenericRequestMapper::builder(), |builder, chain| {
            builder.add_handler_chain(chain)
        })
        .build()
}

fn unhandled_source(error: DispatchError) -> Option<DispatchError> {
    match error {
        DispatchError::Unhandled(source) => match source.downcast_ref::<DispatchError>() {
            Some(DispatchError::HandlerNotFound) => Some(DispatchError::HandlerNotFound),
            Some(DispatchError::AdapterNotFound) => Some(DispatchError::AdapterNotFound),
            _ => None,
        },
        _ => None,
    }
}

#[tokio::test]
async fn test_matching_chain_produces_output() {
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(EchoHandler { name: "hello" }).build(),
        ]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("hello");
    let output = dispatcher.dispatch(&mut input).await.unwrap();
    assert_eq!(output.as_deref(), Some("echo:hello"));
}

#[tokio::test]
async fn test_no_match_without_exception_mapper_returns_none() {
    let handler = CountingHandler::<String>::rejecting();
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(handler.clone()).build(),
        ]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let result = dispatcher.dispatch(&mut input).await;

    assert!(matches!(result, Ok(None)));
    assert_eq!(handler.count(), 0);
}

#[tokio::test]
async fn test_no_match_with_exception_mapper_enters_exception_path() {
    let fallback = ScriptedExceptionHandler::returning("fallback".to_string())
        .matching("suitable request handler");
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(EchoHandler { name: "hello" }).build(),
        ]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .with_exception_mapper(
            GenericExceptionMapper::builder()
                .add_exception_handler(fallback.clone())
                .build(),
        )
        .build()
        .unwrap();

    let mut input = TestInput::named("goodbye");
    let output = dispatcher.dispatch(&mut input).await.unwrap();

    assert_eq!(output.as_deref(), Some("fallback"));
    assert_eq!(fallback.count(), 1);
}

#[tokio::test]
async fn test_no_match_with_unhelpful_exception_mapper_is_unhandled() {
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .with_exception_mapper(
            GenericExceptionMapper::builder()
                .add_exception_handler(
                    ScriptedExceptionHandler::returning("never".to_string()).matching("database"),
                )
                .build(),
        )
        .build()
        .unwrap();

    let mut input = TestInput::named("goodbye");
    let error = dispatcher.dispatch(&mut input).await.unwrap_err();

    assert!(matches!(
        unhandled_source(error),
        Some(DispatchError::HandlerNotFound)
    ));
}

#[tokio::test]
async fn test_no_supporting_adapter_is_unhandled_and_skips_handler() {
    let handler = CountingHandler::returning("never".to_string());
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(handler.clone()).build(),
        ]))
        .add_handler_adapter(RefusingAdapter)
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let error = dispatcher.dispatch(&mut input).await.unwrap_err();

    assert!(matches!(
        unhandled_source(error),
        Some(DispatchError::AdapterNotFound)
    ));
    assert_eq!(handler.count(), 0);
}

#[tokio::test]
async fn test_generic_adapter_ignores_foreign_handler_kinds() {
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![Chain::builder(Orphan, |_| true).build()]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let error = dispatcher.dispatch(&mut input).await.unwrap_err();

    assert!(matches!(
        unhandled_source(error),
        Some(DispatchError::AdapterNotFound)
    ));
}

#[tokio::test]
async fn test_interceptors_run_in_onion_order() {
    let log = CallLog::new();
    let chain = Chain::for_request_handler(EchoHandler { name: "hello" })
        .add_request_interceptor(RecordingInterceptor::new("chain-request", log.clone()))
        .add_response_interceptor(RecordingInterceptor::new("chain-response", log.clone()))
        .build();

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![chain]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .add_request_interceptor(RecordingInterceptor::new("global-request-1", log.clone()))
        .add_request_interceptor(RecordingInterceptor::new("global-request-2", log.clone()))
        .add_response_interceptor(RecordingInterceptor::new("global-response", log.clone()))
        .build()
        .unwrap();

    let mut input = TestInput::named("hello");
    dispatcher.dispatch(&mut input).await.unwrap();

    assert_eq!(
        log.entries(),
        [
            "global-request-1",
            "global-request-2",
            "chain-request",
            "chain-response",
            "global-response",
        ]
    );
}

#[tokio::test]
async fn test_failing_interceptor_aborts_before_handler() {
    let log = CallLog::new();
    let handler = CountingHandler::returning("never".to_string());
    let chain = Chain::for_request_handler(handler.clone())
        .add_request_interceptor(RecordingInterceptor::new("chain-request", log.clone()))
        .build();

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![chain]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .add_request_interceptor(RecordingInterceptor::failing(
            "global-request",
            log.clone(),
            "rejected",
        ))
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let error = dispatcher.dispatch(&mut input).await.unwrap_err();

    assert!(matches!(error, DispatchError::Unhandled(_)));
    assert_eq!(error.cause().map(|e| e.to_string()).as_deref(), Some("rejected"));
    assert_eq!(log.entries(), ["global-request"]);
    assert_eq!(handler.count(), 0);
}

#[tokio::test]
async fn test_response_interceptor_can_replace_output() {
    let chain = Chain::for_request_handler(EchoHandler { name: "hello" })
        .add_response_interceptor(FnResponseInterceptor::new(
            |_input: &mut TestInput, output: &mut Option<String>| {
                if let Some(text) = output.as_mut() {
                    text.push('!');
                }
                Ok(())
            },
        ))
        .build();

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![chain]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("hello");
    let output = dispatcher.dispatch(&mut input).await.unwrap();
    assert_eq!(output.as_deref(), Some("echo:hello!"));
}

#[tokio::test]
async fn test_first_matching_chain_wins() {
    let first = CountingHandler::returning("first".to_string());
    let second = CountingHandler::returning("second".to_string());

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(first.clone()).build(),
            Chain::for_request_handler(second.clone()).build(),
        ]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let output = dispatcher.dispatch(&mut input).await.unwrap();

    assert_eq!(output.as_deref(), Some("first"));
    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 0);
}

#[tokio::test]
async fn test_mappers_are_consulted_in_order() {
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(EchoHandler { name: "hello" }).build(),
        ]))
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(CountingHandler::returning("second".to_string())).build(),
        ]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut hello = TestInput::named("hello");
    let mut other = TestInput::named("other");

    assert_eq!(
        dispatcher.dispatch(&mut hello).await.unwrap().as_deref(),
        Some("echo:hello")
    );
    assert_eq!(
        dispatcher.dispatch(&mut other).await.unwrap().as_deref(),
        Some("second")
    );
}

#[tokio::test]
async fn test_chain_exception_handler_preempts_global_mapper() {
    let chain_handler = ScriptedExceptionHandler::returning("chain".to_string());
    let global_handler = ScriptedExceptionHandler::returning("global".to_string());

    let chain = Chain::for_request_handler(CountingHandler::<String>::failing("boom"))
        .add_exception_handler(chain_handler.clone())
        .build();

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![chain]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .with_exception_mapper(
            GenericExceptionMapper::builder()
                .add_exception_handler(global_handler.clone())
                .build(),
        )
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let output = dispatcher.dispatch(&mut input).await.unwrap();

    assert_eq!(output.as_deref(), Some("chain"));
    assert_eq!(chain_handler.count(), 1);
    assert_eq!(global_handler.count(), 0);
}

#[tokio::test]
async fn test_global_mapper_used_when_chain_handlers_decline() {
    let chain_handler = ScriptedExceptionHandler::returning("chain".to_string()).matching("timeout");
    let global_handler = ScriptedExceptionHandler::returning("global".to_string());

    let chain = Chain::for_request_handler(CountingHandler::<String>::failing("boom"))
        .add_exception_handler(chain_handler.clone())
        .build();

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![chain]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .with_exception_mapper(
            GenericExceptionMapper::builder()
                .add_exception_handler(global_handler.clone())
                .build(),
        )
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let output = dispatcher.dispatch(&mut input).await.unwrap();

    assert_eq!(output.as_deref(), Some("global"));
    assert_eq!(chain_handler.count(), 0);
    assert_eq!(global_handler.count(), 1);
}

#[tokio::test]
async fn test_unrecovered_error_keeps_original_source() {
    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![
            Chain::for_request_handler(CountingHandler::<String>::failing("boom")).build(),
        ]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let error = dispatcher.dispatch(&mut input).await.unwrap_err();

    assert!(matches!(error, DispatchError::Unhandled(_)));
    assert_eq!(error.cause().map(|e| e.to_string()).as_deref(), Some("boom"));
}

#[tokio::test]
async fn test_failing_exception_handler_is_reported() {
    let chain = Chain::for_request_handler(CountingHandler::<String>::failing("boom"))
        .add_exception_handler(ScriptedExceptionHandler::<String>::failing("recovery broke"))
        .build();

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![chain]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let error = dispatcher.dispatch(&mut input).await.unwrap_err();

    assert!(matches!(error, DispatchError::ExceptionHandler(_)));
    assert_eq!(
        error.cause().map(|e| e.to_string()).as_deref(),
        Some("recovery broke")
    );
}

#[tokio::test]
async fn test_exception_handler_sees_mutations_made_before_failure() {
    let chain = Chain::for_request_handler(MutatingFailingHandler)
        .add_exception_handler(AttributeReportingExceptionHandler)
        .build();

    let dispatcher = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![chain]))
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build()
        .unwrap();

    let mut input = TestInput::named("anything");
    let output = dispatcher.dispatch(&mut input).await.unwrap();

    assert_eq!(output.as_deref(), Some("handler failed:touched"));
    assert_eq!(input.attributes, ["touched"]);
}

#[test]
fn test_builder_requires_mapper_and_adapter() {
    let missing_mapper = Dispatcher::builder()
        .add_handler_adapter(GenericHandlerAdapter::new())
        .build();
    assert_eq!(
        missing_mapper.err(),
        Some(ConfigurationError::MissingRequestMapper)
    );

    let missing_adapter = Dispatcher::builder()
        .add_request_mapper(mapper_for(vec![]))
        .build();
    assert_eq!(
        missing_adapter.err(),
        Some(ConfigurationError::MissingHandlerAdapter)
    );
}
