use yew::prelude::*;

use crate::catalog;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <style>
            {r#".hero {
                padding: 5rem 1rem 4rem;
                text-align: center;
            }
            .hero-badge {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.5rem 1rem;
                border-radius: 9999px;
                font-size: 0.875rem;
                font-weight: 500;
                background: #dbeafe;
                color: #1e40af;
                margin-bottom: 1.5rem;
            }
            .hero h1 {
                font-size: 3.5rem;
                font-weight: 700;
                color: #111827;
                margin-bottom: 1.5rem;
            }
            .hero h1 .gradient-text {
                background: linear-gradient(90deg, #2563eb, #9333ea);
                -webkit-background-clip: text;
                -webkit-text-fill-color: transparent;
            }
            .hero-subtitle {
                font-size: 1.25rem;
                color: #4b5563;
                max-width: 48rem;
                margin: 0 auto 2rem;
                line-height: 1.6;
            }
            .hero-cta-group {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                gap: 1rem;
                margin-bottom: 3rem;
            }
            .hero-cta {
                padding: 1rem 2rem;
                border-radius: 9999px;
                font-size: 1.125rem;
                font-weight: 500;
                cursor: pointer;
                color: #fff;
                border: none;
                background: linear-gradient(90deg, #2563eb, #9333ea);
            }
            .hero-cta.secondary {
                color: #374151;
                background: none;
                border: 2px solid #d1d5db;
            }
            .hero-cta.secondary:hover { border-color: #2563eb; color: #2563eb; }
            .hero-stats {
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
                max-width: 56rem;
                margin: 0 auto;
            }
            .stat-value { font-size: 1.875rem; font-weight: 700; margin-bottom: 0.5rem; }
            .stat-value.accent-blue { color: #2563eb; }
            .stat-value.accent-purple { color: #9333ea; }
            .stat-value.accent-green { color: #16a34a; }
            .stat-label { color: #4b5563; }
            @media (max-width: 768px) {
                .hero h1 { font-size: 2.25rem; }
                .hero-stats { grid-template-columns: 1fr; }
            }"#}
            </style>
            <span class="hero-badge">{"⚡ Trusted by 50,000+ Students"}</span>
            <h1>
                {"Master "}
                <span class="gradient-text">{"Technology"}</span>
                <br />
                {"Transform Your Career"}
            </h1>
            <p class="hero-subtitle">
                {"Join thousands of learners who have advanced their careers with our comprehensive courses, hands-on projects, and industry-recognized certifications."}
            </p>
            <div class="hero-cta-group">
                <button class="hero-cta">{"▶ Start Learning Today"}</button>
                <button class="hero-cta secondary">{"Browse Courses"}</button>
            </div>
            <div class="hero-stats">
                { for catalog::stats().iter().map(|stat| html! {
                    <div class="stat" key={stat.label}>
                        <div class={classes!("stat-value", stat.accent)}>{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
