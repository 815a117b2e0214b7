//! Seed knowledge base written on first start when no document exists.
//! Content is client-visible; keep it verbatim.

use super::types::{Category, KnowledgeBase, QuestionEntry};

fn entry(patterns: &[&str], responses: &[&str]) -> QuestionEntry {
    QuestionEntry::new(
        patterns.iter().map(|p| p.to_string()).collect(),
        responses.iter().map(|r| r.to_string()).collect(),
    )
}

fn category(name: &str, questions: Vec<QuestionEntry>) -> Category {
    Category {
        name: name.to_string(),
        questions,
    }
}

/// The built-in ADTU knowledge base (7 categories, 20 entries).
pub fn default_knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        categories: vec![
            category(
                "admissions",
                vec![
                    entry(
                        &["admission process", "how to apply", "admission procedure", "admission form"],
                        &["The admission process at ADTU involves: 1) Online application through our portal admissions.adtu.in 2) Document verification 3) Entrance test (if applicable) 4) Personal interview 5) Fee payment. You can apply for 2024 admissions now!"],
                    ),
                    entry(
                        &["eligibility criteria", "qualification required", "admission requirements"],
                        &["Eligibility varies by program: B.Tech - 10+2 with 50% in PCM, MBA - Graduation with 50%, BBA - 10+2 with 45%. Check our website for detailed eligibility for each course."],
                    ),
                    entry(
                        &["last date for admission", "admission deadline", "application last date"],
                        &["For 2024 admissions: B.Tech - July 31st, MBA - August 15th, Other UG/PG courses - August 31st. Early applications get priority!"],
                    ),
                ],
            ),
            category(
                "courses",
                vec![
                    entry(
                        &["engineering courses", "btech programs", "computer science engineering"],
                        &["ADTU offers B.Tech in: Computer Science, Mechanical, Civil, Electrical, Electronics, AI & ML, Data Science. All programs are AICTE approved with industry-oriented curriculum."],
                    ),
                    entry(
                        &["management courses", "mba programs", "business administration"],
                        &["We offer MBA with specializations in: Marketing, Finance, HR, Operations, IT. Also BBA and B.Com programs with excellent placement records."],
                    ),
                    entry(
                        &["medical courses", "pharmacy", "nursing", "paramedical"],
                        &["ADTU offers: B.Pharm, D.Pharm, B.Sc Nursing, BPT (Physiotherapy), and various paramedical courses with modern labs and hospital training."],
                    ),
                ],
            ),
            category(
                "fees",
                vec![
                    entry(
                        &["fee structure", "course fees", "tuition fee", "semester fee"],
                        &["Approximate annual fees: B.Tech - ₹85,000, MBA - ₹75,000, B.Pharm - ₹70,000, BBA - ₹45,000. Hostel extra ₹40,000/year. Detailed fee structure at fees.adtu.in"],
                    ),
                    entry(
                        &["scholarship", "financial aid", "fee concession", "education loan"],
                        &["We offer: Merit scholarships (up to 100%), SC/ST scholarships, Sports quotas, EWS scholarships. Education loan assistance available from major banks."],
                    ),
                ],
            ),
            category(
                "campus",
                vec![
                    entry(
                        &["campus facilities", "infrastructure", "campus building"],
                        &["30-acre green campus with: Smart classrooms, Advanced labs, Central library, Sports complex, Hostels, Cafeteria, Medical center, Wi-Fi campus, ATM, and Transport facility."],
                    ),
                    entry(
                        &["library", "central library", "book bank"],
                        &["Central library with 50,000+ books, 100+ journals, digital library, e-resources, reading halls. Open 8 AM - 8 PM (Mon-Sat). Book bank facility available."],
                    ),
                    entry(
                        &["hostel", "accommodation", "student housing"],
                        &["Separate hostels for boys and girls with: AC/Non-AC rooms, Wi-Fi, Common rooms, Mess, Security, Laundry. Fees: ₹40,000/year (Non-AC), ₹60,000/year (AC)."],
                    ),
                    entry(
                        &["exam hall", "examination center", "building room number"],
                        &["Main exam halls: Block A - Room 101-110, Block B - Room 201-210, Block C - Room 301-305. Specific exam venue details are displayed on notice boards before exams."],
                    ),
                    entry(
                        &["computer lab", "laboratories", "practical labs"],
                        &["We have 15+ advanced labs: Computer labs (8), Engineering labs (4), Pharmacy labs (2), Research lab (1). All labs equipped with latest equipment and software."],
                    ),
                ],
            ),
            category(
                "placement",
                vec![
                    entry(
                        &["placement", "campus recruitment", "companies", "jobs"],
                        &["92% placement record in 2023. Top recruiters: TCS, Infosys, Wipro, Amazon, Microsoft, IBM, Capgemini. Highest package: ₹18 LPA, Average: ₹4.5 LPA."],
                    ),
                    entry(
                        &["training", "internship", "industry exposure"],
                        &["Regular training programs: Soft skills, Technical training, Mock interviews, Industry visits. 6-month compulsory internship in final year with stipend."],
                    ),
                ],
            ),
            category(
                "contact",
                vec![
                    entry(
                        &["contact number", "phone", "email", "address", "location"],
                        &["Admission Office: +91-361-22334455, info@adtu.in. Address: Gandhi Nagar, Panikhaiti, Guwahati, Assam 781026. Website: www.adtu.in"],
                    ),
                    entry(
                        &["visit campus", "campus tour", "location map"],
                        &["Campus visits welcome! Schedule appointment at admission@adtu.in. Location: 15km from Guwahati Railway Station, 25km from Airport. Map: maps.adtu.in"],
                    ),
                ],
            ),
            category(
                "academics",
                vec![
                    entry(
                        &["academic calendar", "semester dates", "holiday list"],
                        &["Academic Year 2024: Odd Semester (July-Dec), Even Semester (Jan-June). Detailed calendar with holidays available at academics.adtu.in"],
                    ),
                    entry(
                        &["exam schedule", "time table", "exam date sheet"],
                        &["Exam schedules are published 15 days before exams on university portal and notice boards. Regular updates on exam.adtu.in"],
                    ),
                    entry(
                        &["faculty", "professors", "teaching staff"],
                        &["150+ highly qualified faculty with PhDs from IITs/NITs/foreign universities. Student-teacher ratio 15:1 ensuring personalized attention."],
                    ),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shape() {
        let kb = default_knowledge_base();
        let names: Vec<&str> = kb.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["admissions", "courses", "fees", "campus", "placement", "contact", "academics"]
        );
        assert_eq!(kb.total_questions(), 20);
        for cat in &kb.categories {
            for q in &cat.questions {
                assert!(!q.patterns.is_empty(), "{} has an entry without patterns", cat.name);
                assert!(q.patterns.iter().all(|p| !p.trim().is_empty()));
                assert_eq!(q.responses.len(), 1);
            }
        }
    }
}
