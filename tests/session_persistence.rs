//! End-to-end persistence tests for chat sessions and the vocabulary cache

use healthmate::session::{ChatMessage, ChatSession, SessionRepository};
use healthmate::store::{KvStore, CHAT_SESSIONS_KEY, SYMPTOM_VOCAB_KEY};

fn open_repo(dir: &tempfile::TempDir) -> SessionRepository {
    let store = KvStore::open_at(dir.path().join("store")).unwrap();
    SessionRepository::open(store).unwrap()
}

#[test]
fn conversation_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut repo = open_repo(&dir);
        repo.append(ChatMessage::user("I have a headache")).unwrap();
        repo.append(ChatMessage::bot("How long has it lasted?")).unwrap();
    }

    let repo = open_repo(&dir);
    assert_eq!(repo.messages().len(), 2);
    assert_eq!(repo.messages()[0].text, "I have a headache");
    assert_eq!(repo.messages()[1].text, "How long has it lasted?");
}

#[test]
fn sessions_accumulate_in_order_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut repo = open_repo(&dir);
        repo.append(ChatMessage::user("first")).unwrap();
        repo.start_new().unwrap();
        repo.append(ChatMessage::user("second")).unwrap();
    }

    {
        let mut repo = open_repo(&dir);
        repo.start_new().unwrap();
        repo.append(ChatMessage::user("third")).unwrap();
    }

    let repo = open_repo(&dir);
    let titles: Vec<String> = repo.sessions().iter().map(|s| s.title()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn resumed_session_grows_in_place_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let older_id;

    {
        let mut repo = open_repo(&dir);
        repo.append(ChatMessage::user("older")).unwrap();
        older_id = repo.active().id.clone();
        repo.start_new().unwrap();
        repo.append(ChatMessage::user("newer")).unwrap();
    }

    {
        let mut repo = open_repo(&dir);
        assert!(repo.resume(&older_id));
        repo.append(ChatMessage::user("continued")).unwrap();
    }

    let repo = open_repo(&dir);
    assert_eq!(repo.sessions().len(), 2);
    assert_eq!(repo.sessions()[0].id, older_id);
    assert_eq!(repo.sessions()[0].messages.len(), 2);
    assert_eq!(repo.sessions()[0].messages[1].text, "continued");
}

#[test]
fn clear_all_leaves_vocabulary_cache_intact() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = KvStore::open_at(dir.path().join("store")).unwrap();
        store
            .write(SYMPTOM_VOCAB_KEY, &vec!["fever".to_string()])
            .unwrap();
        let mut repo = SessionRepository::open(store).unwrap();
        repo.append(ChatMessage::user("hello")).unwrap();
        repo.clear_all().unwrap();
    }

    let store = KvStore::open_at(dir.path().join("store")).unwrap();
    let sessions: Option<Vec<ChatSession>> = store.read(CHAT_SESSIONS_KEY).unwrap();
    assert!(sessions.is_none());
    let vocab: Option<Vec<String>> = store.read(SYMPTOM_VOCAB_KEY).unwrap();
    assert_eq!(vocab.unwrap(), vec!["fever"]);
}

#[test]
fn stored_document_is_plain_json() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut repo = open_repo(&dir);
        repo.append(ChatMessage::user("hello")).unwrap();
    }

    let store = KvStore::open_at(dir.path().join("store")).unwrap();
    let sessions: Vec<ChatSession> = store.read(CHAT_SESSIONS_KEY).unwrap().unwrap();
    let json = serde_json::to_value(&sessions).unwrap();

    // Whole-document array of sessions, each message with id/text/sender.
    let first = &json[0]["messages"][0];
    assert_eq!(first["text"], "hello");
    assert_eq!(first["sender"], "user");
    assert!(first["id"].is_string());
}
