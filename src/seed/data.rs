// ABOUTME: The literal EdLab sample dataset, one table per seeded collection
// ABOUTME: Values are fixed demo records; keys are unique within each table by construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! # Sample Dataset
//!
//! The hardcoded demo records for all ten collections. Cross-collection
//! references (college codes, usernames, registration numbers) are plain
//! strings and intentionally unchecked.

use crate::models::{
    Announcement, AttendanceRecord, ClassSection, College, Course, Department, ReportCard,
    StaffMember, Student, UserAccount,
};
use chrono::{DateTime, TimeZone, Utc};

/// Midnight UTC on a literal calendar date
fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    at(y, m, d, 0, 0)
}

/// A literal UTC date and time
fn at(y: i32, m: u32, d: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, hour, min, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Demo login accounts, one per role
#[must_use]
pub fn sample_users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            username: "admin123",
            password: "admin@123",
            email: "admin@edlab.com",
            role: "admin",
            first_name: "Admin",
            last_name: "User",
            college_code: "TVE",
            college_name: "College of Engineering Trivandrum",
            phone: "9876543210",
            department: "Administration",
            is_active: true,
            created_at: day(2024, 1, 13),
            last_login: day(2024, 1, 13),
        },
        UserAccount {
            username: "hod456",
            password: "hod@456",
            email: "hod@edlab.com",
            role: "hod",
            first_name: "Dr.",
            last_name: "Sharma",
            college_code: "KMCT",
            college_name: "KMCT College of Engineering, Kozhikode",
            phone: "9876543211",
            department: "Computer Science & Engineering",
            is_active: true,
            created_at: day(2024, 1, 13),
            last_login: day(2024, 1, 13),
        },
        UserAccount {
            username: "staff789",
            password: "staff@789",
            email: "staff@edlab.com",
            role: "staff",
            first_name: "John",
            last_name: "Doe",
            college_code: "TCR",
            college_name: "Govt. Engineering College, Thrissur",
            phone: "9876543212",
            department: "Mechanical Engineering",
            is_active: true,
            created_at: day(2024, 1, 13),
            last_login: day(2024, 1, 13),
        },
        UserAccount {
            username: "advisor101",
            password: "advisor@101",
            email: "advisor@edlab.com",
            role: "staff_advisor",
            first_name: "Prof.",
            last_name: "Kumar",
            college_code: "RIT",
            college_name: "Rajiv Gandhi Institute of Technology, Kottayam",
            phone: "9876543213",
            department: "Civil Engineering",
            is_active: true,
            created_at: day(2024, 1, 13),
            last_login: day(2024, 1, 13),
        },
    ]
}

/// The four affiliated colleges
#[must_use]
pub fn sample_colleges() -> Vec<College> {
    vec![
        College {
            code: "TVE",
            name: "College of Engineering Trivandrum",
            location: "Thiruvananthapuram",
            affiliated_university: "KTU",
            established_year: 1998,
            students_count: 3500,
            staff_count: 250,
        },
        College {
            code: "KMCT",
            name: "KMCT College of Engineering, Kozhikode",
            location: "Kozhikode",
            affiliated_university: "KTU",
            established_year: 2000,
            students_count: 2800,
            staff_count: 200,
        },
        College {
            code: "TCR",
            name: "Govt. Engineering College, Thrissur",
            location: "Thrissur",
            affiliated_university: "KTU",
            established_year: 1987,
            students_count: 3200,
            staff_count: 280,
        },
        College {
            code: "RIT",
            name: "Rajiv Gandhi Institute of Technology, Kottayam",
            location: "Kottayam",
            affiliated_university: "KTU",
            established_year: 2001,
            students_count: 2900,
            staff_count: 210,
        },
    ]
}

/// Departments across the colleges
#[must_use]
pub fn sample_departments() -> Vec<Department> {
    vec![
        Department {
            code: "CSE",
            name: "Computer Science & Engineering",
            college_code: "TVE",
            hod_name: "Dr. Sharma",
            total_students: 420,
            total_staff: 35,
        },
        Department {
            code: "ECE",
            name: "Electronics & Communication Engineering",
            college_code: "TVE",
            hod_name: "Dr. Patel",
            total_students: 380,
            total_staff: 32,
        },
        Department {
            code: "ME",
            name: "Mechanical Engineering",
            college_code: "TCR",
            hod_name: "Prof. Kumar",
            total_students: 400,
            total_staff: 38,
        },
        Department {
            code: "CE",
            name: "Civil Engineering",
            college_code: "RIT",
            hod_name: "Dr. Singh",
            total_students: 380,
            total_staff: 36,
        },
    ]
}

/// Enrolled demo students
#[must_use]
pub fn sample_students() -> Vec<Student> {
    vec![
        Student {
            registration_number: "TVE20CS001",
            first_name: "Arjun",
            last_name: "Nair",
            email: "arjun.nair@student.edu",
            phone: "9876543220",
            college_code: "TVE",
            college_name: "College of Engineering Trivandrum",
            department: "Computer Science & Engineering",
            semester: 4,
            batch: 2022,
            gpa: 3.8,
            enrollment_date: day(2022, 7, 15),
            status: "active",
        },
        Student {
            registration_number: "TVE20CS002",
            first_name: "Priya",
            last_name: "Menon",
            email: "priya.menon@student.edu",
            phone: "9876543221",
            college_code: "TVE",
            college_name: "College of Engineering Trivandrum",
            department: "Computer Science & Engineering",
            semester: 4,
            batch: 2022,
            gpa: 3.9,
            enrollment_date: day(2022, 7, 15),
            status: "active",
        },
        Student {
            registration_number: "KMCT20ECE001",
            first_name: "Vikram",
            last_name: "Kumar",
            email: "vikram.kumar@student.edu",
            phone: "9876543222",
            college_code: "KMCT",
            college_name: "KMCT College of Engineering, Kozhikode",
            department: "Electronics & Communication Engineering",
            semester: 2,
            batch: 2023,
            gpa: 3.7,
            enrollment_date: day(2023, 7, 18),
            status: "active",
        },
    ]
}

/// Teaching staff
#[must_use]
pub fn sample_staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            staff_id: "TVE_001",
            first_name: "Dr.",
            last_name: "Sharma",
            email: "sharma@edlab.com",
            phone: "9876543230",
            college_code: "TVE",
            department: "Computer Science & Engineering",
            designation: "Associate Professor",
            qualifications: &["B.Tech", "M.Tech", "PhD"],
            join_date: day(2010, 6, 1),
            is_active: true,
        },
        StaffMember {
            staff_id: "TCR_001",
            first_name: "Prof.",
            last_name: "Kumar",
            email: "kumar@edlab.com",
            phone: "9876543231",
            college_code: "TCR",
            department: "Mechanical Engineering",
            designation: "Assistant Professor",
            qualifications: &["B.Tech", "M.Tech"],
            join_date: day(2015, 8, 15),
            is_active: true,
        },
        StaffMember {
            staff_id: "KMCT_001",
            first_name: "Dr.",
            last_name: "Patel",
            email: "patel@edlab.com",
            phone: "9876543232",
            college_code: "KMCT",
            department: "Electronics & Communication Engineering",
            designation: "Professor",
            qualifications: &["B.Tech", "M.Tech", "PhD"],
            join_date: day(2008, 1, 20),
            is_active: true,
        },
    ]
}

/// Course catalogue
#[must_use]
pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            course_code: "CS301",
            course_name: "Data Structures",
            semester: 3,
            credits: 4,
            department: "Computer Science & Engineering",
            instructor: "Dr. Sharma",
            total_students: 120,
        },
        Course {
            course_code: "CS302",
            course_name: "Database Management Systems",
            semester: 3,
            credits: 4,
            department: "Computer Science & Engineering",
            instructor: "Dr. Sharma",
            total_students: 125,
        },
        Course {
            course_code: "ME201",
            course_name: "Thermodynamics",
            semester: 2,
            credits: 3,
            department: "Mechanical Engineering",
            instructor: "Prof. Kumar",
            total_students: 98,
        },
        Course {
            course_code: "ECE401",
            course_name: "Digital Signal Processing",
            semester: 4,
            credits: 4,
            department: "Electronics & Communication Engineering",
            instructor: "Dr. Patel",
            total_students: 110,
        },
    ]
}

/// Class sections
#[must_use]
pub fn sample_classes() -> Vec<ClassSection> {
    vec![
        ClassSection {
            class_id: "TVE_CSE_3A",
            college_code: "TVE",
            department: "Computer Science & Engineering",
            semester: 3,
            section: "A",
            total_strength: 60,
            class_advisor: "Dr. Sharma",
            created_date: day(2024, 1, 1),
        },
        ClassSection {
            class_id: "TVE_CSE_3B",
            college_code: "TVE",
            department: "Computer Science & Engineering",
            semester: 3,
            section: "B",
            total_strength: 58,
            class_advisor: "Prof. Nair",
            created_date: day(2024, 1, 1),
        },
        ClassSection {
            class_id: "TCR_ME_2A",
            college_code: "TCR",
            department: "Mechanical Engineering",
            semester: 2,
            section: "A",
            total_strength: 52,
            class_advisor: "Prof. Kumar",
            created_date: day(2024, 1, 1),
        },
    ]
}

/// Active announcements
#[must_use]
pub fn sample_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1",
            title: "Welcome to EdLab 2024",
            content: "Welcome to the new academic year. Please update your profiles.",
            college_code: "TVE",
            posted_by: "admin123",
            posted_date: day(2024, 1, 13),
            expiry_date: day(2024, 12, 31),
            priority: "high",
            is_active: true,
        },
        Announcement {
            id: "2",
            title: "Semester Examination Schedule",
            content: "Midterm examinations scheduled for March 2024",
            college_code: "TVE",
            posted_by: "hod456",
            posted_date: day(2024, 1, 10),
            expiry_date: day(2024, 4, 30),
            priority: "high",
            is_active: true,
        },
        Announcement {
            id: "3",
            title: "Library Extensions Now Available",
            content: "Digital library access extended to all students",
            college_code: "KMCT",
            posted_by: "admin123",
            posted_date: day(2024, 1, 8),
            expiry_date: day(2024, 6, 30),
            priority: "medium",
            is_active: true,
        },
    ]
}

/// Attendance marks for one CS301 session
#[must_use]
pub fn sample_attendance() -> Vec<AttendanceRecord> {
    vec![
        AttendanceRecord {
            id: "TVE_CSE_3A_20240113_001",
            class_id: "TVE_CSE_3A",
            course_code: "CS301",
            date: day(2024, 1, 13),
            student_id: "TVE20CS001",
            student_name: "Arjun Nair",
            status: "present",
            marked_by: "Dr. Sharma",
            marked_time: at(2024, 1, 13, 10, 30),
        },
        AttendanceRecord {
            id: "TVE_CSE_3A_20240113_002",
            class_id: "TVE_CSE_3A",
            course_code: "CS301",
            date: day(2024, 1, 13),
            student_id: "TVE20CS002",
            student_name: "Priya Menon",
            status: "present",
            marked_by: "Dr. Sharma",
            marked_time: at(2024, 1, 13, 10, 30),
        },
    ]
}

/// Evaluated course results
#[must_use]
pub fn sample_reports() -> Vec<ReportCard> {
    vec![
        ReportCard {
            id: "TVE20CS001_CS301_2024",
            student_id: "TVE20CS001",
            student_name: "Arjun Nair",
            course_code: "CS301",
            course_name: "Data Structures",
            semester: 3,
            internal_marks: 35,
            assignment_marks: 10,
            practical_marks: 20,
            external_marks: 68,
            total_marks: 133,
            grade: "A",
            gpa: 4.0,
            remarks: "Excellent performance",
            evaluated_by: "Dr. Sharma",
            evaluated_date: day(2024, 1, 13),
        },
        ReportCard {
            id: "TVE20CS002_CS301_2024",
            student_id: "TVE20CS002",
            student_name: "Priya Menon",
            course_code: "CS301",
            course_name: "Data Structures",
            semester: 3,
            internal_marks: 36,
            assignment_marks: 10,
            practical_marks: 21,
            external_marks: 70,
            total_marks: 137,
            grade: "A+",
            gpa: 4.0,
            remarks: "Outstanding performance",
            evaluated_by: "Dr. Sharma",
            evaluated_date: day(2024, 1, 13),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedRecord;
    use std::collections::HashSet;

    fn assert_unique_keys<R: SeedRecord>(records: &[R]) {
        let keys: HashSet<String> = records.iter().map(SeedRecord::document_key).collect();
        assert_eq!(keys.len(), records.len(), "duplicate key in {}", R::COLLECTION);
    }

    #[test]
    fn every_table_has_unique_keys() {
        assert_unique_keys(&sample_users());
        assert_unique_keys(&sample_colleges());
        assert_unique_keys(&sample_departments());
        assert_unique_keys(&sample_students());
        assert_unique_keys(&sample_staff());
        assert_unique_keys(&sample_courses());
        assert_unique_keys(&sample_classes());
        assert_unique_keys(&sample_announcements());
        assert_unique_keys(&sample_attendance());
        assert_unique_keys(&sample_reports());
    }

    #[test]
    fn department_keys_are_college_scoped() {
        let keys: Vec<String> = sample_departments()
            .iter()
            .map(SeedRecord::document_key)
            .collect();
        assert_eq!(keys, vec!["TVE_CSE", "TVE_ECE", "TCR_ME", "RIT_CE"]);
    }

    #[test]
    fn dataset_sizes_match_the_fixture() {
        assert_eq!(sample_users().len(), 4);
        assert_eq!(sample_colleges().len(), 4);
        assert_eq!(sample_departments().len(), 4);
        assert_eq!(sample_students().len(), 3);
        assert_eq!(sample_staff().len(), 3);
        assert_eq!(sample_courses().len(), 4);
        assert_eq!(sample_classes().len(), 3);
        assert_eq!(sample_announcements().len(), 3);
        assert_eq!(sample_attendance().len(), 2);
        assert_eq!(sample_reports().len(), 2);
    }
}
