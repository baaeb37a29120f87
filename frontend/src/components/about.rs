use yew::prelude::*;

use crate::catalog;
use crate::config::BRAND_NAME;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <style>
            {r#".about {
                padding: 5rem 1rem;
            }
            .about-grid {
                max-width: 80rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 4rem;
                align-items: center;
            }
            .about h2 {
                font-size: 2.25rem;
                font-weight: 700;
                color: #111827;
                margin-bottom: 1.5rem;
            }
            .about-lead { font-size: 1.25rem; color: #4b5563; margin-bottom: 2rem; }
            .highlight {
                display: flex;
                align-items: flex-start;
                gap: 1rem;
                margin-bottom: 1.5rem;
            }
            .highlight-icon {
                flex-shrink: 0;
                padding: 0.5rem;
                border-radius: 0.5rem;
                background: #dbeafe;
            }
            .highlight h3 { font-weight: 600; color: #111827; margin-bottom: 0.25rem; }
            .highlight p { color: #4b5563; }
            .ready-panel {
                text-align: center;
                border-radius: 1rem;
                padding: 2rem;
                background: linear-gradient(135deg, #eff6ff, #faf5ff);
            }
            .ready-panel h3 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
            .ready-panel p { color: #4b5563; margin-bottom: 1.5rem; }
            @media (max-width: 1024px) {
                .about-grid { grid-template-columns: 1fr; }
            }"#}
            </style>
            <div class="about-grid">
                <div>
                    <h2>{format!("Why Choose {}?", BRAND_NAME)}</h2>
                    <p class="about-lead">
                        {"We're committed to providing world-class education that transforms careers and lives."}
                    </p>
                    { for catalog::highlights().iter().map(|highlight| html! {
                        <div class="highlight" key={highlight.title}>
                            <div class="highlight-icon">{highlight.icon}</div>
                            <div>
                                <h3>{highlight.title}</h3>
                                <p>{highlight.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="ready-panel">
                    <h3>{"Ready to Start?"}</h3>
                    <p>
                        {format!("Join thousands of successful students who have transformed their careers with {}.", BRAND_NAME)}
                    </p>
                    <button class="hero-cta">{"Get Started Today"}</button>
                </div>
            </div>
        </section>
    }
}
