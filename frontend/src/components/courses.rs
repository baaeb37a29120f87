use yew::prelude::*;

use crate::catalog::{self, format_count, Course};

const SKILL_CHIPS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: &'static Course,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = props.course;
    let (skills, hidden) = course.skill_preview(SKILL_CHIPS);

    html! {
        <div class="course-card">
            <div class={classes!("course-stripe", course.theme.class())}></div>
            <div class="course-body">
                <div class="course-head">
                    <div class={classes!("course-icon", course.theme.class())}>{course.theme.icon()}</div>
                    <div class="course-price">
                        <div class="price">{course.price.to_string()}</div>
                        <div class="price-note">{"per course"}</div>
                    </div>
                </div>
                <h3>{course.title}</h3>
                <p class="course-description">{course.description}</p>
                <div class="chips">
                    { for skills.iter().map(|skill| html! {
                        <span class="chip" key={*skill}>{*skill}</span>
                    }) }
                    if hidden > 0 {
                        <span class="chip">{format!("+{} more", hidden)}</span>
                    }
                </div>
                <div class="course-facts">
                    <div>{"🕒 "}{course.duration}</div>
                    <div>{format!("👥 {} students", format_count(course.students))}</div>
                    <div>{"🏅 "}{course.level}</div>
                    <div>{format!("⭐ {} rating", course.rating)}</div>
                </div>
                // No enrolment flow exists yet.
                <button class="card-cta">{"Enroll Now ›"}</button>
            </div>
        </div>
    }
}

#[function_component(CoursesSection)]
pub fn courses_section() -> Html {
    html! {
        <section id="courses" class="listing">
            <style>
            {r#".listing {
                padding: 5rem 1rem;
            }
            .listing.shaded { background: #f9fafb; }
            .listing-header {
                text-align: center;
                margin-bottom: 4rem;
            }
            .listing-header h2 {
                font-size: 2.25rem;
                font-weight: 700;
                color: #111827;
                margin-bottom: 1rem;
            }
            .listing-header p {
                font-size: 1.25rem;
                color: #4b5563;
                max-width: 42rem;
                margin: 0 auto;
            }
            .course-grid {
                max-width: 80rem;
                margin: 0 auto;
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 2rem;
            }
            .course-card {
                background: #fff;
                border-radius: 1rem;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                overflow: hidden;
                transition: transform 0.3s, box-shadow 0.3s;
            }
            .course-card:hover {
                transform: translateY(-0.5rem);
                box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
            }
            .course-stripe { height: 0.5rem; }
            .theme-ocean { background: linear-gradient(90deg, #3b82f6, #9333ea); }
            .theme-forest { background: linear-gradient(90deg, #22c55e, #0d9488); }
            .theme-sunset { background: linear-gradient(90deg, #f97316, #dc2626); }
            .theme-dusk { background: linear-gradient(90deg, #a855f7, #db2777); }
            .course-body { padding: 2rem; }
            .course-head {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 1.5rem;
            }
            .course-icon {
                padding: 0.75rem;
                border-radius: 0.75rem;
                font-size: 2rem;
            }
            .course-price { text-align: right; }
            .course-price .price { font-size: 1.5rem; font-weight: 700; color: #111827; }
            .course-price .price-note { font-size: 0.875rem; color: #6b7280; }
            .course-description { color: #4b5563; margin-bottom: 1.5rem; }
            .chips {
                display: flex;
                flex-wrap: wrap;
                gap: 0.5rem;
                margin-bottom: 1.5rem;
            }
            .chip {
                padding: 0.25rem 0.75rem;
                border-radius: 9999px;
                background: #f3f4f6;
                color: #374151;
                font-size: 0.875rem;
            }
            .course-facts {
                display: grid;
                grid-template-columns: repeat(2, 1fr);
                gap: 1rem;
                margin-bottom: 1.5rem;
                font-size: 0.875rem;
                color: #4b5563;
            }
            .card-cta {
                width: 100%;
                padding: 0.75rem;
                border: none;
                border-radius: 0.75rem;
                color: #fff;
                font-weight: 500;
                cursor: pointer;
                background: linear-gradient(90deg, #2563eb, #9333ea);
            }
            @media (max-width: 768px) {
                .course-grid { grid-template-columns: 1fr; }
            }"#}
            </style>
            <div class="listing-header">
                <h2>{"Popular Courses"}</h2>
                <p>{"Choose from our carefully crafted curriculum designed by industry experts"}</p>
            </div>
            <div class="course-grid">
                { for catalog::courses().iter().map(|course| html! {
                    <CourseCard key={course.id} {course} />
                }) }
            </div>
        </section>
    }
}
