use std::collections::BTreeMap;

use serenade_core::model::{AnswerKey, PageId, QuestionId, VisitSession};
use services::QuizService;

use super::test_harness::{
    MediaDirs, NavigationHint, fast_timing, setup_view_harness, setup_view_harness_with_timing,
};

fn visit_on(page: PageId) -> VisitSession {
    VisitSession {
        current_page: page,
        ..VisitSession::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn fresh_visit_renders_intro_with_gradient_fallback() {
    let media = MediaDirs::new("intro");
    let mut harness = setup_view_harness(media, VisitSession::new(), NavigationHint(""));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("intro-page"), "missing intro in {html}");
    assert!(
        html.contains("intro-background--gradient"),
        "missing gradient fallback in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn gallery_hint_with_empty_pictures_shows_notice_without_carousel() {
    let media = MediaDirs::new("empty-gallery");
    let mut harness = setup_view_harness(media, VisitSession::new(), NavigationHint("gallery"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("gallery-page"), "missing gallery in {html}");
    assert!(
        html.contains("Nenhuma foto ou vídeo encontrado"),
        "missing notice in {html}"
    );
    assert!(!html.contains("class=\"carousel\""), "unexpected carousel in {html}");
    assert!(
        html.contains("Desde 29 de maio de 2021 • 1110 dias juntos"),
        "missing counter in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn gallery_with_photos_builds_carousel() {
    let media = MediaDirs::new("gallery");
    media.add_photo("01.png");
    media.add_photo("02.png");
    let mut harness = setup_view_harness(media, visit_on(PageId::Gallery), NavigationHint(""));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("class=\"carousel\""), "missing carousel in {html}");
    assert!(html.contains("data:image/jpeg;base64,"), "missing slide in {html}");
    assert!(html.contains("1 / 2"), "missing slide counter in {html}");
    assert!(!html.contains("gate-button"), "gate shown before a full cycle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_cycle_reveals_the_gate() {
    let media = MediaDirs::new("gate");
    media.add_photo("01.png");
    let mut session = visit_on(PageId::Gallery);
    session.mark_cycle_complete();
    let mut harness = setup_view_harness(media, session, NavigationHint(""));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("gate-button"), "missing gate in {html}");
    assert!(html.contains("Refazer o quiz"), "missing replay link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_hint_keeps_the_current_page() {
    let media = MediaDirs::new("proposal-hint");
    let mut harness = setup_view_harness(media, visit_on(PageId::Quiz), NavigationHint("proposal"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Pergunta 1 de 10"), "missing quiz header in {html}");
    assert!(html.contains("a) Habbibs"), "missing first option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_result_shows_perfect_score() {
    let media = MediaDirs::new("result");
    let quiz = QuizService::with_default_bank().expect("bank");
    let answers: BTreeMap<QuestionId, usize> = quiz
        .questions()
        .iter()
        .map(|question| match question.answer() {
            AnswerKey::Correct(index) => (question.id(), index),
            AnswerKey::Joke => (question.id(), 0),
        })
        .collect();

    let mut session = visit_on(PageId::Quiz);
    session.quiz.answers = answers;
    session.quiz.show_result = true;

    let mut harness = setup_view_harness(media, session, NavigationHint(""));
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Você acertou 9 de 9 perguntas!"),
        "missing headline in {html}"
    );
    assert!(html.contains("Nota: 100%"), "missing grade in {html}");
    assert!(html.contains("PERFEIÇÃO ABSOLUTA!"), "missing feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn accepted_proposal_celebrates_with_proposal_song() {
    let media = MediaDirs::new("proposal");
    media.add_song("Alceu Valença - La Belle de Jour.mp3");
    media.add_song("Roberta Campos - De Janeiro a Janeiro.mp3");
    let mut session = visit_on(PageId::Proposal);
    session.accept_proposal();

    let mut harness = setup_view_harness(media, session, NavigationHint(""));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("QUER CASAR COMIGO?"), "missing question in {html}");
    assert!(html.contains("ELA DISSE SIM!"), "missing celebration in {html}");
    assert!(!html.contains("proposal-accept"), "accept button still shown in {html}");
    assert!(html.contains("data:audio/mpeg;base64,"), "missing song in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hint_is_applied_once_then_the_visit_moves_on() {
    let media = MediaDirs::new("hint-once");
    let mut harness = setup_view_harness(media, VisitSession::new(), NavigationHint("gallery"));
    harness.settle().await;
    assert_eq!(harness.session().current_page, PageId::Gallery);

    harness.update_session(|visit| visit.current_page = PageId::Proposal);
    for _ in 0..3 {
        harness.drive_async().await;
    }
    assert_eq!(harness.session().current_page, PageId::Proposal);
    let html = harness.render();
    assert!(html.contains("proposal-page"), "missing proposal in {html}");
    assert!(!html.contains("gallery-page"), "pulled back to gallery in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_shows_popup_then_moves_to_next_question() {
    let media = MediaDirs::new("quiz-answer");
    let quiz = QuizService::with_default_bank().expect("bank");
    let first = quiz.question(0).expect("first question").clone();
    let AnswerKey::Correct(right) = first.answer() else {
        panic!("first question has a right answer");
    };

    let mut harness = setup_view_harness_with_timing(
        media,
        visit_on(PageId::Quiz),
        NavigationHint(""),
        fast_timing(),
    );
    harness.settle().await;
    assert!(harness.render().contains("Pergunta 1 de 10"));

    harness.submit_answer(right);
    harness.submit_answer(right + 1);
    let visit = harness.session();
    assert!(visit.has_popup());
    assert_eq!(visit.answer_for(first.id()), Some(right));
    let html = harness.render();
    assert!(html.contains("class=\"popup "), "missing popup in {html}");

    assert!(
        harness
            .drive_until(20, |visit| visit.quiz.current_question == 1)
            .await
    );
    assert!(!harness.session().has_popup());
    let html = harness.render();
    assert!(html.contains("Pergunta 2 de 10"), "missing second question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn last_answer_shows_result_then_opens_gallery() {
    let media = MediaDirs::new("quiz-last");
    let quiz = QuizService::with_default_bank().expect("bank");
    let mut session = visit_on(PageId::Quiz);
    session.quiz.current_question = quiz.len() - 1;

    let mut harness =
        setup_view_harness_with_timing(media, session, NavigationHint(""), fast_timing());
    harness.settle().await;

    harness.submit_answer(0);
    assert!(harness.drive_until(20, |visit| visit.quiz.show_result).await);
    let html = harness.render();
    assert!(html.contains("Resultado Final"), "missing result in {html}");

    assert!(
        harness
            .drive_until(20, |visit| visit.current_page == PageId::Gallery)
            .await
    );
}
