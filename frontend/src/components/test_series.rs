use yew::prelude::*;

use crate::catalog::{self, format_count, TestSeries};

#[derive(Properties, PartialEq)]
pub struct TestSeriesCardProps {
    pub series: &'static TestSeries,
}

#[function_component(TestSeriesCard)]
pub fn test_series_card(props: &TestSeriesCardProps) -> Html {
    let series = props.series;

    html! {
        <div class="series-card">
            <div class="series-head">
                <div class="series-icon">{"🎯"}</div>
                <span class={classes!("badge", series.difficulty.badge_class())}>
                    {series.difficulty.label()}
                </span>
            </div>
            <h3>{series.title}</h3>
            <div class="series-facts">
                <div><span>{"Questions:"}</span><span class="fact">{series.questions.to_string()}</span></div>
                <div><span>{"Duration:"}</span><span class="fact">{series.duration}</span></div>
                <div><span>{"Attempted:"}</span><span class="fact">{format_count(series.attempted)}</span></div>
            </div>
            <div class="series-topics">
                <div class="topics-title">{"Topics Covered:"}</div>
                <div class="chips">
                    { for series.topics.iter().map(|topic| html! {
                        <span class="topic" key={*topic}>{*topic}</span>
                    }) }
                </div>
            </div>
            <div class="series-price">
                <div class="price">{series.price.to_string()}</div>
                if series.price.is_free() {
                    <span class="free-mark">{"✔"}</span>
                }
            </div>
            <button class="card-cta series-cta">{"Start Test"}</button>
        </div>
    }
}

#[function_component(TestSeriesSection)]
pub fn test_series_section() -> Html {
    html! {
        <section id="tests" class="listing shaded">
            <style>
            {r#".series-grid {
                max-width: 80rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(3, 1fr);
                gap: 2rem;
            }
            .series-card {
                background: #fff;
                border-radius: 1rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                padding: 2rem;
                transition: transform 0.3s, box-shadow 0.3s;
            }
            .series-card:hover {
                transform: translateY(-0.5rem);
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            }
            .series-head {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 1.5rem;
            }
            .series-icon {
                padding: 0.75rem;
                border-radius: 0.75rem;
                background: linear-gradient(90deg, #22c55e, #0d9488);
            }
            .badge {
                padding: 0.25rem 0.75rem;
                border-radius: 9999px;
                font-size: 0.875rem;
                font-weight: 500;
            }
            .badge-green { background: #dcfce7; color: #166534; }
            .badge-orange { background: #ffedd5; color: #9a3412; }
            .badge-red { background: #fee2e2; color: #991b1b; }
            .series-facts {
                display: flex;
                flex-direction: column;
                gap: 0.75rem;
                margin-bottom: 1.5rem;
                font-size: 0.875rem;
                color: #4b5563;
            }
            .series-facts > div { display: flex; justify-content: space-between; }
            .series-facts .fact { font-weight: 500; }
            .topics-title {
                font-size: 0.875rem;
                font-weight: 500;
                color: #374151;
                margin-bottom: 0.5rem;
            }
            .topic {
                padding: 0.25rem 0.5rem;
                border-radius: 9999px;
                background: #dbeafe;
                color: #1e40af;
                font-size: 0.75rem;
            }
            .series-price {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 1.5rem;
            }
            .series-price .price { font-size: 1.5rem; font-weight: 700; color: #111827; }
            .free-mark { color: #22c55e; font-size: 1.5rem; }
            .card-cta.series-cta { background: linear-gradient(90deg, #22c55e, #0d9488); }
            @media (max-width: 768px) {
                .series-grid { grid-template-columns: 1fr; }
            }"#}
            </style>
            <div class="listing-header">
                <h2>{"Practice Test Series"}</h2>
                <p>{"Test your knowledge and prepare for interviews with our comprehensive test series"}</p>
            </div>
            <div class="series-grid">
                { for catalog::test_series().iter().map(|series| html! {
                    <TestSeriesCard key={series.id} {series} />
                }) }
            </div>
        </section>
    }
}
