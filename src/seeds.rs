//! Built-in content: the problem catalogue, simulated reports, canned assistant
//! replies and the leaderboard / profile / home page records.

use crate::domain::{
  Achievement, Activity, ActivityKind, CannedReply, CodeSnippet, Difficulty, Feature, LeaderboardEntry,
  PlatformStat, Problem, ProblemExample, QuickAction, SkillProgress, TopPerformer, UserProfile,
};

/// Id of the problem shown when the route identifier is unknown.
pub const FEATURED_PROBLEM_ID: u32 = 1;

pub const DEFAULT_SOURCE: &str = "# Write your solution here\n\n";

pub const RUNNING_TEXT: &str = "Running...";
pub const SUBMITTING_TEXT: &str = "Submitting...";

pub const SAMPLE_RUN_REPORT: &str = "Sample Test Case 1: Passed ✓
Input: nums = [2,7,11,15], target = 9
Output: [0,1]
Expected: [0,1]

Sample Test Case 2: Passed ✓
Input: nums = [3,2,4], target = 6
Output: [1,2]
Expected: [1,2]

All test cases passed!";

pub const ACCEPTED_REPORT: &str = "Submission Result: Accepted ✓

Runtime: 52 ms (Beats 89.2% of submissions)
Memory: 15.1 MB (Beats 76.8% of submissions)

Test cases passed: 54/54
Time complexity: O(n)
Space complexity: O(n)";

pub const HINT_TEXT: &str = "💡 AI Hint:

Think about what data structure would allow you to quickly check if a number exists and retrieve its position.

Consider this approach:
1. Use a hash map to store numbers and their indices
2. For each number, check if (target - number) exists in the hash map
3. If it exists, you've found your answer!

Would you like another hint?";

pub const GREETING: &str = "Hello! I'm your AI coding assistant. I can help you with:

• Debugging code
• Algorithm explanations
• Code optimization
• Problem-solving strategies
• Data structure recommendations

What would you like to work on today?";

pub const CANNED_REPLIES: [CannedReply; 2] = [
  CannedReply {
    content: "I'd be happy to help you with that! Let me analyze your request and provide you with a detailed solution.

Here's what I suggest:

1. **First, let's break down the problem**: Understanding the core issue is crucial for finding the right approach.

2. **Consider the time complexity**: We want to aim for an optimal solution that scales well.

3. **Think about edge cases**: What happens with empty inputs, single elements, or extreme values?

Would you like me to elaborate on any of these points or do you have specific code you'd like me to review?",
    snippet: Some(CodeSnippet {
      code: "def example_solution(arr):
    # Your optimized solution here
    if not arr:
        return []

    # Process the array efficiently
    result = []
    for item in arr:
        # Add your logic here
        result.append(item)

    return result",
      language: "python",
    }),
  },
  CannedReply {
    content: "Great question! This is a common challenge in competitive programming. Let me walk you through the approach step by step:

**Algorithm Strategy:**
• Use a hash map for O(1) lookups
• Two-pointer technique for sorted arrays
• Consider sliding window for substring problems

**Code Pattern:**
The key insight here is to use the right data structure. For this type of problem, I recommend starting with a hash map approach.

**Time Complexity:** O(n)
**Space Complexity:** O(n)

Would you like me to explain any specific part in more detail?",
    snippet: Some(CodeSnippet {
      code: "// Example implementation
function solve(input) {
    const map = new Map();

    for (let i = 0; i < input.length; i++) {
        if (map.has(input[i])) {
            // Found duplicate or target
            return [map.get(input[i]), i];
        }
        map.set(input[i], i);
    }

    return [-1, -1];
}",
      language: "javascript",
    }),
  },
];

pub fn quick_actions() -> Vec<QuickAction> {
  vec![
    QuickAction {
      title: "Debug Code",
      description: "Help me find bugs in my code",
      query: "Can you help me debug this code?",
    },
    QuickAction {
      title: "Algorithm Hint",
      description: "Get hints for solving problems",
      query: "I need a hint for solving this algorithm problem",
    },
    QuickAction {
      title: "Explain Concept",
      description: "Explain programming concepts",
      query: "Can you explain this programming concept?",
    },
    QuickAction {
      title: "Optimize Code",
      description: "Help improve code performance",
      query: "How can I optimize this code for better performance?",
    },
  ]
}

fn example(input: &str, output: &str, explanation: &str) -> ProblemExample {
  ProblemExample { input: input.into(), output: output.into(), explanation: explanation.into() }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// The built-in catalogue, in list order.
pub fn seed_problems() -> Vec<Problem> {
  vec![
    Problem {
      id: 1,
      title: "Two Sum".into(),
      difficulty: Difficulty::Easy,
      summary: "Find two numbers in an array that add up to a target sum.".into(),
      description: "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.

You may assume that each input would have exactly one solution, and you may not use the same element twice.

You can return the answer in any order.".into(),
      examples: vec![
        example("nums = [2,7,11,15], target = 9", "[0,1]", "Because nums[0] + nums[1] == 9, we return [0, 1]."),
        example("nums = [3,2,4], target = 6", "[1,2]", "Because nums[1] + nums[2] == 6, we return [1, 2]."),
      ],
      constraints: strings(&[
        "2 <= nums.length <= 10^4",
        "-10^9 <= nums[i] <= 10^9",
        "-10^9 <= target <= 10^9",
        "Only one valid answer exists.",
      ]),
      tags: strings(&["Array", "Hash Table"]),
      solved: true,
      likes: 1234,
      submissions: 2_456_789,
      acceptance: 89.2,
    },
    Problem {
      id: 2,
      title: "Add Two Numbers".into(),
      difficulty: Difficulty::Medium,
      summary: "Add two numbers represented as linked lists.".into(),
      description: "You are given two non-empty linked lists representing two non-negative integers. The digits are stored in reverse order, and each of their nodes contains a single digit. Add the two numbers and return the sum as a linked list.".into(),
      examples: vec![example("l1 = [2,4,3], l2 = [5,6,4]", "[7,0,8]", "342 + 465 = 807.")],
      constraints: strings(&[
        "The number of nodes in each linked list is in the range [1, 100].",
        "0 <= Node.val <= 9",
        "The list represents a number without leading zeros.",
      ]),
      tags: strings(&["Linked List", "Math"]),
      solved: false,
      likes: 987,
      submissions: 1_543_210,
      acceptance: 41.3,
    },
    Problem {
      id: 3,
      title: "Merge K Sorted Lists".into(),
      difficulty: Difficulty::Hard,
      summary: "Merge k sorted linked lists and return as one sorted list.".into(),
      description: "You are given an array of k linked-lists lists, each linked-list is sorted in ascending order. Merge all the linked-lists into one sorted linked-list and return it.".into(),
      examples: vec![example(
        "lists = [[1,4,5],[1,3,4],[2,6]]",
        "[1,1,2,3,4,4,5,6]",
        "Merging the three sorted lists yields one sorted list.",
      )],
      constraints: strings(&["k == lists.length", "0 <= k <= 10^4", "0 <= lists[i].length <= 500"]),
      tags: strings(&["Linked List", "Divide and Conquer", "Heap"]),
      solved: false,
      likes: 2345,
      submissions: 567_890,
      acceptance: 50.1,
    },
    Problem {
      id: 4,
      title: "Valid Parentheses".into(),
      difficulty: Difficulty::Easy,
      summary: "Determine if the input string has valid parentheses.".into(),
      description: "Given a string s containing just the characters '(', ')', '{', '}', '[' and ']', determine if the input string is valid. Open brackets must be closed by the same type of brackets and in the correct order.".into(),
      examples: vec![
        example("s = \"()[]{}\"", "true", "Every bracket is closed in order."),
        example("s = \"(]\"", "false", "The bracket types do not match."),
      ],
      constraints: strings(&["1 <= s.length <= 10^4", "s consists of parentheses only '()[]{}'."]),
      tags: strings(&["String", "Stack"]),
      solved: true,
      likes: 1876,
      submissions: 2_789_012,
      acceptance: 40.7,
    },
    Problem {
      id: 5,
      title: "Binary Tree Inorder Traversal".into(),
      difficulty: Difficulty::Medium,
      summary: "Return the inorder traversal of a binary tree.".into(),
      description: "Given the root of a binary tree, return the inorder traversal of its nodes' values.".into(),
      examples: vec![example("root = [1,null,2,3]", "[1,3,2]", "Left subtree, node, right subtree.")],
      constraints: strings(&["The number of nodes in the tree is in the range [0, 100].", "-100 <= Node.val <= 100"]),
      tags: strings(&["Tree", "DFS", "Stack"]),
      solved: false,
      likes: 1456,
      submissions: 987_654,
      acceptance: 74.5,
    },
    Problem {
      id: 6,
      title: "Regular Expression Matching".into(),
      difficulty: Difficulty::Hard,
      summary: "Implement regular expression matching with support for . and *.".into(),
      description: "Given an input string s and a pattern p, implement regular expression matching with support for '.' and '*' where '.' matches any single character and '*' matches zero or more of the preceding element. The matching should cover the entire input string.".into(),
      examples: vec![example("s = \"aa\", p = \"a*\"", "true", "'*' lets 'a' repeat once more.")],
      constraints: strings(&[
        "1 <= s.length <= 20",
        "1 <= p.length <= 20",
        "s contains only lowercase English letters.",
        "p contains only lowercase English letters, '.', and '*'.",
      ]),
      tags: strings(&["String", "Dynamic Programming"]),
      solved: false,
      likes: 3421,
      submissions: 234_567,
      acceptance: 28.2,
    },
  ]
}

pub fn seed_leaderboard() -> Vec<LeaderboardEntry> {
  const AVATAR: &str = "/api/placeholder/32/32";
  let rows: [(&str, u32, u32, u32, &str, &str, [&str; 3], &str); 8] = [
    ("CodeMaster2024", 2847, 234, 45, "US", "Grandmaster", ["🏆", "🔥", "⚡"], "+12"),
    ("AlgorithmNinja", 2653, 198, 32, "IN", "Master", ["🥈", "🎯", "💎"], "+8"),
    ("DataStructureQueen", 2456, 176, 28, "CN", "Master", ["🥉", "🌟", "🚀"], "+5"),
    ("BinarySearcher", 2234, 145, 23, "DE", "Expert", ["🎨", "🔧", "⭐"], "+3"),
    ("RecursiveGenius", 2098, 132, 19, "JP", "Expert", ["🧠", "🏅", "💡"], "+2"),
    ("GraphTraverser", 1987, 125, 16, "KR", "Expert", ["🌐", "🔍", "⚙️"], "+1"),
    ("DynamicProgrammer", 1856, 118, 14, "CA", "Advanced", ["📊", "🎯", "🔥"], "0"),
    ("SortingWizard", 1743, 109, 12, "AU", "Advanced", ["🧙", "⚡", "🏆"], "-1"),
  ];
  rows
    .into_iter()
    .enumerate()
    .map(|(i, (username, points, problems_solved, streak, country, level, badges, weekly_change))| {
      LeaderboardEntry {
        rank: i as u32 + 1,
        username,
        avatar: AVATAR,
        points,
        problems_solved,
        streak,
        country,
        level,
        badges: badges.to_vec(),
        weekly_change,
      }
    })
    .collect()
}

pub fn seed_top_performers() -> Vec<TopPerformer> {
  vec![
    TopPerformer { title: "Most Problems Solved", user: "CodeMaster2024", value: "234 problems" },
    TopPerformer { title: "Longest Streak", user: "AlgorithmNinja", value: "45 days" },
    TopPerformer { title: "Rising Star", user: "DataStructureQueen", value: "+156 points" },
  ]
}

pub fn seed_user() -> UserProfile {
  UserProfile {
    name: "Alex Johnson",
    username: "alexj_codes",
    email: "alex.johnson@email.com",
    avatar: "/api/placeholder/100/100",
    location: "San Francisco, CA",
    join_date: "March 2023",
    bio: "Full-stack developer passionate about algorithms and competitive programming. Love solving complex problems and learning new technologies.",
    level: "Expert",
    rank: 127,
    points: 1847,
    streak: 23,
    total_solved: 89,
    easy: 45,
    medium: 32,
    hard: 12,
    github: "alexj-codes",
    linkedin: "alex-johnson-dev",
    website: "alexjohnson.dev",
  }
}

pub fn seed_achievements() -> Vec<Achievement> {
  vec![
    Achievement { title: "Problem Solver", description: "Solved 50+ problems", earned: true, date: "2 weeks ago" },
    Achievement { title: "Streak Master", description: "Maintained 30-day streak", earned: true, date: "1 month ago" },
    Achievement { title: "Algorithm Expert", description: "Solved 10+ hard problems", earned: true, date: "3 weeks ago" },
    Achievement { title: "Speed Demon", description: "Solved problem in under 5 minutes", earned: false, date: "Not earned" },
    Achievement { title: "Consistent Performer", description: "Solved problems for 7 consecutive days", earned: true, date: "1 week ago" },
    Achievement { title: "Rising Star", description: "Gained 500+ points in a month", earned: false, date: "Not earned" },
  ]
}

pub fn seed_activity() -> Vec<Activity> {
  use ActivityKind::{Attempted, Solved};
  vec![
    Activity { kind: Solved, title: "Two Sum", difficulty: Difficulty::Easy, date: "2 hours ago", time: "12m 34s" },
    Activity { kind: Attempted, title: "Merge Intervals", difficulty: Difficulty::Medium, date: "1 day ago", time: "45m 12s" },
    Activity { kind: Solved, title: "Valid Parentheses", difficulty: Difficulty::Easy, date: "2 days ago", time: "8m 45s" },
    Activity { kind: Solved, title: "Binary Tree Traversal", difficulty: Difficulty::Medium, date: "3 days ago", time: "23m 56s" },
    Activity { kind: Attempted, title: "Regular Expression Matching", difficulty: Difficulty::Hard, date: "4 days ago", time: "1h 23m" },
  ]
}

pub fn seed_skills() -> Vec<SkillProgress> {
  vec![
    SkillProgress { name: "Arrays", solved: 25, total: 30, percentage: 83 },
    SkillProgress { name: "Strings", solved: 18, total: 25, percentage: 72 },
    SkillProgress { name: "Dynamic Programming", solved: 12, total: 20, percentage: 60 },
    SkillProgress { name: "Trees", solved: 15, total: 22, percentage: 68 },
    SkillProgress { name: "Graphs", solved: 8, total: 18, percentage: 44 },
    SkillProgress { name: "Hash Tables", solved: 14, total: 16, percentage: 87 },
  ]
}

pub fn seed_features() -> Vec<Feature> {
  vec![
    Feature { title: "AI-Powered Hints", description: "Get intelligent hints when you are stuck without spoiling the solution" },
    Feature { title: "Real-time Execution", description: "Test your code instantly with our fast execution engine" },
    Feature { title: "Global Leaderboard", description: "Compete with programmers worldwide and climb the rankings" },
    Feature { title: "Streak System", description: "Build consistency with daily coding streaks and achievements" },
  ]
}

pub fn seed_stats() -> Vec<PlatformStat> {
  vec![
    PlatformStat { label: "Active Users", value: "10K+" },
    PlatformStat { label: "Problems Solved", value: "1M+" },
    PlatformStat { label: "Success Rate", value: "87%" },
    PlatformStat { label: "Languages", value: "5+" },
  ]
}
