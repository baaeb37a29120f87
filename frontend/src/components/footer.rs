use yew::prelude::*;

use crate::catalog;
use crate::config::BRAND_NAME;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
            {r#".site-footer {
                background: #111827;
                color: #fff;
                padding: 3rem 1rem;
            }
            .footer-grid {
                max-width: 80rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 2rem;
            }
            .footer-brand { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
            .site-footer p, .site-footer a { color: #9ca3af; text-decoration: none; }
            .site-footer a:hover { color: #fff; }
            .site-footer h4 { font-weight: 600; margin-bottom: 1rem; }
            .site-footer ul { list-style: none; padding: 0; }
            .site-footer li { margin-bottom: 0.5rem; }
            .footer-bottom {
                max-width: 80rem;
                margin: 2rem auto 0;
                padding-top: 2rem;
                border-top: 1px solid #1f2937;
                text-align: center;
            }
            @media (max-width: 768px) {
                .footer-grid { grid-template-columns: 1fr; }
            }"#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"📖 "}{BRAND_NAME}</div>
                    <p>{"Empowering learners worldwide with cutting-edge technology education."}</p>
                </div>
                { for catalog::footer_columns().iter().map(|column| html! {
                    <div key={column.heading}>
                        <h4>{column.heading}</h4>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li key={*link}><a href="#">{*link}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{format!("© 2025 {}. All rights reserved.", BRAND_NAME)}</p>
            </div>
        </footer>
    }
}
