// ABOUTME: Record types for the ten seeded collections of the EdLab demo dataset
// ABOUTME: Each type names its collection, its natural document key, and its stored field layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EdLab

//! # Record Types
//!
//! One plain struct per seeded collection. Stored field names use
//! camelCase, matching the layout the EdLab application reads back.
//! Cross-collection references (a student's `collegeCode`, an
//! announcement's `postedBy`) are informal strings and are not validated
//! against the referenced collection; this is demo data.

use crate::seed::SeedRecord;
use crate::store::Document;
use chrono::{DateTime, Utc};

/// Login account for the demo application
#[derive(Debug, Clone)]
pub struct UserAccount {
    /// Login name, the document key
    pub username: &'static str,
    /// Plaintext demo password
    pub password: &'static str,
    /// Contact email
    pub email: &'static str,
    /// Role: admin, hod, staff, or staff_advisor
    pub role: &'static str,
    /// Given name
    pub first_name: &'static str,
    /// Family name
    pub last_name: &'static str,
    /// Code of the college the account belongs to
    pub college_code: &'static str,
    /// Full college name
    pub college_name: &'static str,
    /// Contact phone
    pub phone: &'static str,
    /// Department label
    pub department: &'static str,
    /// Whether the account can log in
    pub is_active: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Most recent login timestamp
    pub last_login: DateTime<Utc>,
}

impl SeedRecord for UserAccount {
    const COLLECTION: &'static str = "users";

    fn document_key(&self) -> String {
        self.username.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("username", self.username)
            .field("password", self.password)
            .field("email", self.email)
            .field("role", self.role)
            .field("firstName", self.first_name)
            .field("lastName", self.last_name)
            .field("collegeCode", self.college_code)
            .field("collegeName", self.college_name)
            .field("phone", self.phone)
            .field("department", self.department)
            .field("isActive", self.is_active)
            .field("createdAt", self.created_at)
            .field("lastLogin", self.last_login)
    }
}

/// An affiliated engineering college
#[derive(Debug, Clone)]
pub struct College {
    /// Short college code, the document key
    pub code: &'static str,
    /// Full college name
    pub name: &'static str,
    /// City
    pub location: &'static str,
    /// Affiliating university
    pub affiliated_university: &'static str,
    /// Founding year
    pub established_year: i32,
    /// Enrolled student headcount
    pub students_count: i32,
    /// Staff headcount
    pub staff_count: i32,
}

impl SeedRecord for College {
    const COLLECTION: &'static str = "colleges";

    fn document_key(&self) -> String {
        self.code.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("code", self.code)
            .field("name", self.name)
            .field("location", self.location)
            .field("affiliatedUniversity", self.affiliated_university)
            .field("establishedYear", self.established_year)
            .field("studentsCount", self.students_count)
            .field("staffCount", self.staff_count)
    }
}

/// A department within a college
///
/// Stored under the composite key `{collegeCode}_{code}`, since department
/// codes repeat across colleges. The key is derived, not stored as a
/// field.
#[derive(Debug, Clone)]
pub struct Department {
    /// Department code (unique within a college)
    pub code: &'static str,
    /// Department name
    pub name: &'static str,
    /// Owning college code
    pub college_code: &'static str,
    /// Head of department
    pub hod_name: &'static str,
    /// Student headcount
    pub total_students: i32,
    /// Staff headcount
    pub total_staff: i32,
}

impl SeedRecord for Department {
    const COLLECTION: &'static str = "departments";

    fn document_key(&self) -> String {
        format!("{}_{}", self.college_code, self.code)
    }

    fn document(&self) -> Document {
        Document::new()
            .field("code", self.code)
            .field("name", self.name)
            .field("collegeCode", self.college_code)
            .field("hodName", self.hod_name)
            .field("totalStudents", self.total_students)
            .field("totalStaff", self.total_staff)
    }
}

/// An enrolled student
#[derive(Debug, Clone)]
pub struct Student {
    /// University registration number, the document key
    pub registration_number: &'static str,
    /// Given name
    pub first_name: &'static str,
    /// Family name
    pub last_name: &'static str,
    /// Contact email
    pub email: &'static str,
    /// Contact phone
    pub phone: &'static str,
    /// College code
    pub college_code: &'static str,
    /// Full college name
    pub college_name: &'static str,
    /// Department label
    pub department: &'static str,
    /// Current semester
    pub semester: i32,
    /// Admission batch year
    pub batch: i32,
    /// Grade point average
    pub gpa: f64,
    /// Enrollment date
    pub enrollment_date: DateTime<Utc>,
    /// Enrollment status
    pub status: &'static str,
}

impl SeedRecord for Student {
    const COLLECTION: &'static str = "students";

    fn document_key(&self) -> String {
        self.registration_number.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("registrationNumber", self.registration_number)
            .field("firstName", self.first_name)
            .field("lastName", self.last_name)
            .field("email", self.email)
            .field("phone", self.phone)
            .field("collegeCode", self.college_code)
            .field("collegeName", self.college_name)
            .field("department", self.department)
            .field("semester", self.semester)
            .field("batch", self.batch)
            .field("gpa", self.gpa)
            .field("enrollmentDate", self.enrollment_date)
            .field("status", self.status)
    }
}

/// A teaching staff member
#[derive(Debug, Clone)]
pub struct StaffMember {
    /// Staff identifier, the document key
    pub staff_id: &'static str,
    /// Given name
    pub first_name: &'static str,
    /// Family name
    pub last_name: &'static str,
    /// Contact email
    pub email: &'static str,
    /// Contact phone
    pub phone: &'static str,
    /// College code
    pub college_code: &'static str,
    /// Department label
    pub department: &'static str,
    /// Job title
    pub designation: &'static str,
    /// Academic qualifications
    pub qualifications: &'static [&'static str],
    /// Joining date
    pub join_date: DateTime<Utc>,
    /// Whether currently employed
    pub is_active: bool,
}

impl SeedRecord for StaffMember {
    const COLLECTION: &'static str = "staff";

    fn document_key(&self) -> String {
        self.staff_id.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("staffId", self.staff_id)
            .field("firstName", self.first_name)
            .field("lastName", self.last_name)
            .field("email", self.email)
            .field("phone", self.phone)
            .field("collegeCode", self.college_code)
            .field("department", self.department)
            .field("designation", self.designation)
            .field("qualifications", self.qualifications)
            .field("joinDate", self.join_date)
            .field("isActive", self.is_active)
    }
}

/// A course offering
#[derive(Debug, Clone)]
pub struct Course {
    /// Course code, the document key
    pub course_code: &'static str,
    /// Course title
    pub course_name: &'static str,
    /// Semester the course is taught in
    pub semester: i32,
    /// Credit value
    pub credits: i32,
    /// Owning department
    pub department: &'static str,
    /// Instructor name
    pub instructor: &'static str,
    /// Enrolled student count
    pub total_students: i32,
}

impl SeedRecord for Course {
    const COLLECTION: &'static str = "courses";

    fn document_key(&self) -> String {
        self.course_code.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("courseCode", self.course_code)
            .field("courseName", self.course_name)
            .field("semester", self.semester)
            .field("credits", self.credits)
            .field("department", self.department)
            .field("instructor", self.instructor)
            .field("totalStudents", self.total_students)
    }
}

/// A class section within a department and semester
#[derive(Debug, Clone)]
pub struct ClassSection {
    /// Class identifier, the document key
    pub class_id: &'static str,
    /// College code
    pub college_code: &'static str,
    /// Department label
    pub department: &'static str,
    /// Semester
    pub semester: i32,
    /// Section letter
    pub section: &'static str,
    /// Number of students in the section
    pub total_strength: i32,
    /// Advising staff member
    pub class_advisor: &'static str,
    /// Section creation date
    pub created_date: DateTime<Utc>,
}

impl SeedRecord for ClassSection {
    const COLLECTION: &'static str = "classes";

    fn document_key(&self) -> String {
        self.class_id.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("classId", self.class_id)
            .field("collegeCode", self.college_code)
            .field("department", self.department)
            .field("semester", self.semester)
            .field("section", self.section)
            .field("totalStrength", self.total_strength)
            .field("classAdvisor", self.class_advisor)
            .field("createdDate", self.created_date)
    }
}

/// A campus-wide announcement
#[derive(Debug, Clone)]
pub struct Announcement {
    /// Announcement identifier, the document key
    pub id: &'static str,
    /// Headline
    pub title: &'static str,
    /// Body text
    pub content: &'static str,
    /// Target college code
    pub college_code: &'static str,
    /// Posting account username
    pub posted_by: &'static str,
    /// Posting date
    pub posted_date: DateTime<Utc>,
    /// Expiry date
    pub expiry_date: DateTime<Utc>,
    /// Priority label: high or medium
    pub priority: &'static str,
    /// Whether currently displayed
    pub is_active: bool,
}

impl SeedRecord for Announcement {
    const COLLECTION: &'static str = "announcements";

    fn document_key(&self) -> String {
        self.id.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("id", self.id)
            .field("title", self.title)
            .field("content", self.content)
            .field("collegeCode", self.college_code)
            .field("postedBy", self.posted_by)
            .field("postedDate", self.posted_date)
            .field("expiryDate", self.expiry_date)
            .field("priority", self.priority)
            .field("isActive", self.is_active)
    }
}

/// One student's attendance mark for one class session
#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    /// Attendance identifier, the document key
    pub id: &'static str,
    /// Class section the session belongs to
    pub class_id: &'static str,
    /// Course taught in the session
    pub course_code: &'static str,
    /// Session date
    pub date: DateTime<Utc>,
    /// Student registration number
    pub student_id: &'static str,
    /// Student display name
    pub student_name: &'static str,
    /// present or absent
    pub status: &'static str,
    /// Staff member who marked the attendance
    pub marked_by: &'static str,
    /// When the mark was recorded
    pub marked_time: DateTime<Utc>,
}

impl SeedRecord for AttendanceRecord {
    const COLLECTION: &'static str = "attendance";

    fn document_key(&self) -> String {
        self.id.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("id", self.id)
            .field("classId", self.class_id)
            .field("courseCode", self.course_code)
            .field("date", self.date)
            .field("studentId", self.student_id)
            .field("studentName", self.student_name)
            .field("status", self.status)
            .field("markedBy", self.marked_by)
            .field("markedTime", self.marked_time)
    }
}

/// A student's evaluated result for one course
#[derive(Debug, Clone)]
pub struct ReportCard {
    /// Report identifier, the document key
    pub id: &'static str,
    /// Student registration number
    pub student_id: &'static str,
    /// Student display name
    pub student_name: &'static str,
    /// Course code
    pub course_code: &'static str,
    /// Course title
    pub course_name: &'static str,
    /// Semester
    pub semester: i32,
    /// Internal assessment marks
    pub internal_marks: i32,
    /// Assignment marks
    pub assignment_marks: i32,
    /// Practical marks
    pub practical_marks: i32,
    /// External examination marks
    pub external_marks: i32,
    /// Total marks
    pub total_marks: i32,
    /// Letter grade
    pub grade: &'static str,
    /// Grade points
    pub gpa: f64,
    /// Evaluator remarks
    pub remarks: &'static str,
    /// Evaluating staff member
    pub evaluated_by: &'static str,
    /// Evaluation date
    pub evaluated_date: DateTime<Utc>,
}

impl SeedRecord for ReportCard {
    const COLLECTION: &'static str = "reports";

    fn document_key(&self) -> String {
        self.id.to_owned()
    }

    fn document(&self) -> Document {
        Document::new()
            .field("id", self.id)
            .field("studentId", self.student_id)
            .field("studentName", self.student_name)
            .field("courseCode", self.course_code)
            .field("courseName", self.course_name)
            .field("semester", self.semester)
            .field("internalMarks", self.internal_marks)
            .field("assignmentMarks", self.assignment_marks)
            .field("practicalMarks", self.practical_marks)
            .field("externalMarks", self.external_marks)
            .field("totalMarks", self.total_marks)
            .field("grade", self.grade)
            .field("gpa", self.gpa)
            .field("remarks", self.remarks)
            .field("evaluatedBy", self.evaluated_by)
            .field("evaluatedDate", self.evaluated_date)
    }
}
