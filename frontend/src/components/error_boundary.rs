//! Catch-all for failures in a subtree.
//!
//! Yew has no way to intercept a panic during render, so descendants report
//! failures explicitly through the [`BoundaryHandle`] found in context. Once
//! a failure is reported the subtree is replaced by a fallback with a retry
//! button; retrying clears the flag and mounts the children again.

use std::fmt::Display;

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum BoundaryState {
    Ok,
    Failed(String),
}

#[derive(Clone, PartialEq)]
pub struct BoundaryHandle {
    report: Callback<String>,
}

impl BoundaryHandle {
    pub fn report(&self, error: impl Display) {
        self.report.emit(error.to_string());
    }

    /// Unwraps `result`, reporting the error to the boundary if there is one.
    pub fn capture<T, E: Display>(&self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(e);
                None
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let state = use_state(|| BoundaryState::Ok);

    let handle = {
        let state = state.clone();
        BoundaryHandle {
            report: Callback::from(move |message: String| {
                log::error!("render failure caught by boundary: {}", message);
                state.set(BoundaryState::Failed(message));
            }),
        }
    };

    let reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            log::info!("retrying after boundary failure");
            state.set(BoundaryState::Ok);
        })
    };

    match &*state {
        BoundaryState::Ok => html! {
            <ContextProvider<BoundaryHandle> context={handle}>
                { for props.children.iter() }
            </ContextProvider<BoundaryHandle>>
        },
        BoundaryState::Failed(_) => html! {
            <div class="boundary-fallback">
                <style>
                {r#".boundary-fallback {
                    padding: 2rem;
                    text-align: center;
                }
                .boundary-fallback .boundary-message {
                    color: #dc2626;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .boundary-fallback button {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }"#}
                </style>
                <div class="boundary-message">{"Something went wrong."}</div>
                <button class="boundary-retry" onclick={reset}>{"Try Again"}</button>
            </div>
        },
    }
}
