//! Gateway Integration Tests
//!
//! A real `GuildBot` (tokio-tungstenite connector, reqwest REST client)
//! against the in-process fake platform.
//!
//! Run with: cargo test -p integration-tests --test gateway_tests

use guild_gateway::{GatewayError, GatewayResult, GuildBot, SessionPhase};
use guild_rest::SendMessage;
use integration_tests::{
    at_message_frame, hello_frame, ready_frame, resumed_frame, test_config, FakePlatform, WAIT,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn spawn_run(bot: &GuildBot) -> JoinHandle<GatewayResult<()>> {
    let bot = bot.clone();
    tokio::spawn(async move { bot.run().await })
}

async fn join(task: JoinHandle<GatewayResult<()>>) -> GatewayResult<()> {
    tokio::time::timeout(WAIT, task)
        .await
        .expect("run did not return")
        .expect("run panicked")
}

async fn wait_for<F: Fn() -> bool>(condition: F) {
    let deadline = tokio::time::Instant::now() + WAIT;
    while !condition() {
        assert!(tokio::time::Instant::now() < deadline, "condition not reached");
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
}

// ============================================================================
// Handshake Tests
// ============================================================================

#[tokio::test]
async fn test_identify_and_ready() {
    let mut platform = FakePlatform::start().await.unwrap();
    let bot = GuildBot::new(test_config(&platform.base_url())).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    bot.on("READY", move |bot, _event| {
        let tx = tx.clone();
        async move {
            let me = bot.me().await?;
            tx.send(me.username)?;
            anyhow::Ok(())
        }
    });
    let task = spawn_run(&bot);

    let mut socket = platform.next_socket().await.unwrap();
    socket.send_json(&hello_frame(45_000)).unwrap();

    let identify = socket.recv().await.unwrap();
    assert_eq!(identify["op"], 2);
    assert_eq!(identify["d"]["token"], "Bot 1001.secret");
    assert_eq!(identify["d"]["intents"], 1 | (1 << 12) | (1 << 30));
    assert_eq!(identify["d"]["shard"], serde_json::json!([0, 1]));
    assert_eq!(identify["d"]["properties"]["$device"], "server");

    socket.send_json(&ready_frame(1, "session-1")).unwrap();
    let username = tokio::time::timeout(WAIT, rx.recv()).await.unwrap().unwrap();
    assert_eq!(username, "test-bot");
    assert_eq!(bot.session().session_id().as_deref(), Some("session-1"));
    assert_eq!(bot.session().phase(), SessionPhase::Active);
    assert_eq!(platform.gateway_requests(), 1);

    bot.shutdown();
    join(task).await.unwrap();
}

#[tokio::test]
async fn test_at_message_reply() {
    let mut platform = FakePlatform::start().await.unwrap();
    let bot = GuildBot::new(test_config(&platform.base_url())).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    bot.on("AT_MESSAGE_CREATE", move |bot, event| {
        let tx = tx.clone();
        async move {
            let Some(message) = event.as_message() else {
                anyhow::bail!("AT_MESSAGE_CREATE without message");
            };
            let bot_id = bot.session().user().map(|u| u.id).unwrap_or_default();
            let text = message.content_without_mention(&bot_id);
            let reply = SendMessage::text(format!("{} you said {text}", message.author.mention()))
                .reply_to(&message.id);
            let sent = bot.send_message(&message.channel_id, &reply).await?;
            tx.send(sent.id)?;
            anyhow::Ok(())
        }
    });
    let task = spawn_run(&bot);

    let mut socket = platform.next_socket().await.unwrap();
    socket.send_json(&hello_frame(45_000)).unwrap();
    socket.recv_op(2).await.unwrap();
    socket.send_json(&ready_frame(1, "session-1")).unwrap();
    socket.send_json(&at_message_frame(2, "m-100", "ping")).unwrap();

    let sent_id = tokio::time::timeout(WAIT, rx.recv()).await.unwrap().unwrap();
    assert_eq!(sent_id, "reply-1");

    let sent = platform.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "c1");
    assert_eq!(sent[0].1["content"], "<@7> you said ping");
    assert_eq!(sent[0].1["msg_id"], "m-100");
    assert_eq!(bot.session().sequence(), 2);

    bot.shutdown();
    join(task).await.unwrap();
}

// ============================================================================
// Recovery Tests
// ============================================================================

#[tokio::test]
async fn test_session_timeout_resumes_on_new_connection() {
    let mut platform = FakePlatform::start().await.unwrap();
    let bot = GuildBot::new(test_config(&platform.base_url())).unwrap();
    let task = spawn_run(&bot);

    let mut socket = platform.next_socket().await.unwrap();
    socket.send_json(&hello_frame(45_000)).unwrap();
    socket.recv_op(2).await.unwrap();
    socket.send_json(&ready_frame(3, "session-1")).unwrap();
    let bot_ref = bot.clone();
    wait_for(move || bot_ref.session().sequence() == 3).await;

    socket.send_text("4009").unwrap();

    let mut second = platform.next_socket().await.unwrap();
    second.send_json(&hello_frame(45_000)).unwrap();
    let resume = second.recv_op(6).await.unwrap();
    assert_eq!(resume["d"]["session_id"], "session-1");
    assert_eq!(resume["d"]["seq"], 3);
    assert_eq!(resume["d"]["token"], "Bot 1001.secret");

    second.send_json(&resumed_frame(4)).unwrap();
    let bot_ref = bot.clone();
    wait_for(move || {
        bot_ref.session().phase() == SessionPhase::Active && bot_ref.session().sequence() == 4
    })
    .await;
    assert_eq!(platform.gateway_requests(), 2);
    assert_eq!(bot.stats().reconnects, 1);

    bot.shutdown();
    join(task).await.unwrap();
}

#[tokio::test]
async fn test_internal_error_close_frame_resumes() {
    let mut platform = FakePlatform::start().await.unwrap();
    let bot = GuildBot::new(test_config(&platform.base_url())).unwrap();
    let task = spawn_run(&bot);

    let mut socket = platform.next_socket().await.unwrap();
    socket.send_json(&hello_frame(45_000)).unwrap();
    socket.recv_op(2).await.unwrap();
    socket.send_json(&ready_frame(8, "session-9")).unwrap();
    let bot_ref = bot.clone();
    wait_for(move || bot_ref.session().has_session()).await;

    socket.close(4901).unwrap();

    let mut second = platform.next_socket().await.unwrap();
    second.send_json(&hello_frame(45_000)).unwrap();
    let resume = second.recv_op(6).await.unwrap();
    assert_eq!(resume["d"]["session_id"], "session-9");
    assert_eq!(resume["d"]["seq"], 8);

    bot.shutdown();
    join(task).await.unwrap();
}

#[tokio::test]
async fn test_fatal_close_code_ends_run() {
    let mut platform = FakePlatform::start().await.unwrap();
    let bot = GuildBot::new(test_config(&platform.base_url())).unwrap();
    let task = spawn_run(&bot);

    let mut socket = platform.next_socket().await.unwrap();
    socket.send_json(&hello_frame(45_000)).unwrap();
    socket.recv_op(2).await.unwrap();
    socket.send_text("4004").unwrap();

    let result = join(task).await;
    assert!(matches!(result, Err(GatewayError::UnexpectedCloseCode(4004))));
    assert_eq!(bot.session().phase(), SessionPhase::Terminated);
    assert!(!bot.is_running());
}

#[tokio::test]
async fn test_invalid_token_fails_to_resolve() {
    let platform = FakePlatform::start().await.unwrap();
    let config = guild_common::BotConfig::new("1001", "wrong")
        .with_api_base_url(platform.base_url());
    let bot = GuildBot::new(config).unwrap();

    let result = join(spawn_run(&bot)).await;
    match result {
        Err(GatewayError::Resolve(e)) => assert_eq!(e.status(), Some(401)),
        other => panic!("unexpected result {other:?}"),
    }
    assert_eq!(platform.gateway_requests(), 0);
}
