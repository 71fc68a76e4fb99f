use dioxus::prelude::*;
use serenade_core::model::{PageId, Popup, QuizStep, VisitSession};
use tracing::{debug, info};

use crate::context::AppContext;
use crate::views::PageNavigator;
use crate::vm::{QuizResultVm, map_question, map_quiz_result};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<VisitSession>>();
    let quiz = ctx.quiz();
    let selected = use_signal(|| 0usize);
    let submit = use_answer_submit(selected);

    let progress = session.read().quiz.clone();
    if progress.show_result {
        let result = map_quiz_result(&quiz.score(&progress.answers));
        return rsx! {
            QuizResult { result }
        };
    }

    let Some(question) = quiz.question(progress.current_question).cloned() else {
        return rsx! {
            div { class: "page quiz-page",
                p { class: "notice notice--error", "Nenhuma pergunta disponível." }
            }
        };
    };

    let total = quiz.len();
    let vm = map_question(&question, progress.current_question, total);
    let popup = session.read().popup.clone();

    let on_next = move |_: MouseEvent| submit.call(selected());

    let options = vm.options.iter().enumerate().map(|(index, label)| {
        let mut selected = selected;
        let is_selected = selected() == index;
        let class = if is_selected {
            "quiz-option quiz-option--selected"
        } else {
            "quiz-option"
        };
        rsx! {
            label { class: "{class}",
                input {
                    r#type: "radio",
                    name: "quiz-option",
                    checked: is_selected,
                    onchange: move |_| selected.set(index),
                }
                span { "{label}" }
            }
        }
    });

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                h1 { class: "quiz-title", "💕 Quiz do Amor 💕" }
                p { class: "quiz-counter", "{vm.counter_label}" }
                div { class: "quiz-progress",
                    div { class: "quiz-progress-fill", style: "width: {vm.progress_percent}%;" }
                }
            }
            div { class: "quiz-card",
                h2 { class: "quiz-prompt", "{vm.prompt}" }
                div { class: "quiz-options", {options} }
            }
            if let Some(popup) = popup {
                PopupCard { popup }
            }
            button {
                class: "btn btn-primary quiz-next",
                r#type: "button",
                disabled: session.read().has_popup(),
                onclick: on_next,
                "{vm.button_label}"
            }
        }
    }
}

/// Judge `choice` against the current question and show its popup. Once
/// the popup has been up for `popup_display` the visit moves to the next
/// question, or to the result after the last one.
pub fn use_answer_submit(selected: Signal<usize>) -> Callback<usize> {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<VisitSession>>();
    let quiz = ctx.quiz();
    let popup_display = ctx.settings().timing().popup_display;

    use_callback(move |choice: usize| {
        let mut session = session;
        if session.peek().has_popup() {
            return;
        }
        let current = session.peek().quiz.current_question;
        let Some(question) = quiz.question(current).cloned() else {
            return;
        };
        let popup = quiz.judge(&question, choice, &mut rand::rng());
        {
            let mut visit = session.write();
            visit.record_answer(question.id(), choice);
            visit.show_popup(popup);
        }
        let total = quiz.len();
        spawn(async move {
            let mut session = session;
            let mut selected = selected;
            tokio::time::sleep(popup_display).await;
            let step = session.write().finish_popup_step(total);
            debug!(?step, "popup dismissed");
            if let QuizStep::NextQuestion(_) = step {
                selected.set(0);
            }
        });
    })
}

#[component]
fn PopupCard(popup: Popup) -> Element {
    let modifier = popup.kind.css_modifier();
    let color = popup.kind.accent_color();
    rsx! {
        div { class: "popup {modifier}", style: "border-color: {color};",
            for line in popup.lines() {
                p { class: "popup-line", style: "color: {color};", "{line}" }
            }
        }
    }
}

#[component]
fn QuizResult(result: QuizResultVm) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_context::<PageNavigator>();
    let delay = ctx.settings().timing().quiz_result_display;

    use_future(move || {
        let navigator = navigator.clone();
        async move {
            tokio::time::sleep(delay).await;
            if let Some(next) = PageId::Quiz.next() {
                info!(next = %next, "quiz result shown");
                navigator.go(next);
            }
        }
    });

    rsx! {
        div { class: "page quiz-page",
            div { class: "quiz-result",
                h2 { class: "quiz-result-title", "💖 Resultado Final 💖" }
                p { class: "quiz-result-emoji", "{result.emoji}" }
                p { class: "quiz-result-headline", "{result.headline}" }
                p { class: "quiz-result-grade", "{result.grade}" }
                div { class: "quiz-result-feedback",
                    for line in result.feedback_lines.iter() {
                        p { "{line}" }
                    }
                }
                if let Some(label) = result.wrong_label.as_ref() {
                    p { class: "quiz-result-wrong", "{label}" }
                }
                p { class: "quiz-result-closing", "Você é meu top picks, minha preda bijú! 💕✨" }
            }
        }
    }
}
