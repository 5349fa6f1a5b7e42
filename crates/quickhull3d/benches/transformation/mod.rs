mod convex_hull;
